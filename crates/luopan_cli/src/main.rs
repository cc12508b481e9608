use std::path::PathBuf;

use clap::{Parser, Subcommand};
use luopan_base::{
    AnnualChart, BirthYearConfig, GRID_LAYOUT, MountainInfo, StarInfo, TaiSuiReport, ZodiacSign,
    affected_birth_years_with, annual_chart, center_star, grid_orientation, resolve_mountain,
    tai_sui_report,
};
use luopan_config::{LuopanSettings, load_settings};

#[derive(Parser)]
#[command(name = "luopan", about = "Feng-shui compass and annual chart CLI")]
struct Cli {
    /// Path to a luopan.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Facing and sitting mountain for a compass heading
    Mountain {
        /// Heading in degrees (any real value)
        #[arg(allow_hyphen_values = true)]
        heading: f64,
    },
    /// Center star of the annual flying-star chart
    CenterStar {
        /// CE year
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Annual flying-star grid
    Grid {
        /// CE year
        #[arg(allow_hyphen_values = true)]
        year: i32,
        /// Compass heading used to orient the grid
        #[arg(long, allow_hyphen_values = true)]
        heading: Option<f64>,
        /// Rotate the grid so the faced bearing is on top
        #[arg(long)]
        align: bool,
    },
    /// Catalog entry for one of the nine stars
    Star {
        /// Star number (1-9)
        number: u8,
    },
    /// Tai Sui conflicts of a year, with affected birth years
    TaiSui {
        /// CE year
        #[arg(allow_hyphen_values = true)]
        year: i32,
        /// Years to look back when listing birth years
        #[arg(long)]
        lookback: Option<u32>,
    },
    /// Birth years of a zodiac sign up to a reference year
    BirthYears {
        /// Sign glyph (鼠, 龍, ...) or English name (Rat, Dragon, ...)
        sign: String,
        /// Reference year
        #[arg(allow_hyphen_values = true)]
        year: i32,
        /// Years to look back
        #[arg(long)]
        lookback: Option<u32>,
    },
    /// Compass reading, annual grid and Tai Sui table together
    Chart {
        /// CE year
        #[arg(allow_hyphen_values = true)]
        year: i32,
        /// Compass heading in degrees
        #[arg(long, allow_hyphen_values = true)]
        heading: f64,
    },
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn require_birth_config(settings: &LuopanSettings, lookback: Option<u32>) -> BirthYearConfig {
    let config = match lookback {
        Some(years) => BirthYearConfig::new(years),
        None => settings.birth_years,
    };
    if let Err(e) = config.validate() {
        exit_with(e);
    }
    config
}

fn require_star(number: u8) -> &'static StarInfo {
    StarInfo::require(number).unwrap_or_else(|e| exit_with(e))
}

fn parse_sign(s: &str) -> ZodiacSign {
    s.parse().unwrap_or_else(|e| exit_with(e))
}

fn format_heading(deg: f64) -> String {
    format!("{:03}° ({deg:.1}°)", deg.round() as i64)
}

fn format_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_mountain(info: &MountainInfo) {
    println!("Heading: {}", format_heading(info.heading_deg));
    println!(
        "Facing:  {} ({} {}, {:.1}-{:.1} deg)",
        info.facing(),
        info.direction().name(),
        info.direction().english_name(),
        info.mountain.start_deg,
        info.mountain.end_deg
    );
    println!("Sitting: {}", info.sitting());
    println!("Trigram: {}", info.trigram());
}

fn print_grid(chart: &AnnualChart) {
    println!(
        "Year {}: center star {} ({})",
        chart.year,
        chart.center_star,
        require_star(chart.center_star).name
    );
    for row in GRID_LAYOUT {
        let line: Vec<String> = row
            .iter()
            .map(|d| {
                let cell = chart.cell(*d);
                format!("{:>2} {} {}", d.code(), cell.star, cell.star_info().name)
            })
            .collect();
        println!("  {}", line.join(" | "));
    }
}

fn print_star(info: &StarInfo) {
    println!(
        "{} {} - {} ({}), {}",
        info.number,
        info.name,
        info.element.name(),
        info.element.glyph(),
        if info.auspicious { "吉" } else { "凶" }
    );
    println!("  {}", info.description);
    for r in info.recommendations {
        println!("  + {} [{:?}]: {}", r.item, r.kind, r.reason);
    }
    for t in info.taboos {
        println!("  - {t}");
    }
}

fn print_tai_sui(report: &TaiSuiReport) {
    println!(
        "Year {}: Tai Sui {} ({})",
        report.year,
        report.year_sign.glyph(),
        report.year_sign.name()
    );
    for entry in &report.entries {
        let c = &entry.conflict;
        println!(
            "  {} {} ({}, {})",
            c.kind.label(),
            c.sign.glyph(),
            c.kind.name(),
            c.sign.name()
        );
        println!("    {}", c.description);
        println!("    Remedy: {}", c.remedy);
        println!("    Born: {}", format_years(&entry.birth_years));
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let settings =
        load_settings(cli.config.as_deref()).unwrap_or_else(|e| exit_with(format!("{e:#}")));
    log::debug!("settings: {settings:?}");

    match cli.command {
        Commands::Mountain { heading } => {
            print_mountain(&resolve_mountain(heading));
        }

        Commands::CenterStar { year } => {
            let star = center_star(year);
            println!("{star} ({})", require_star(star).name);
        }

        Commands::Grid {
            year,
            heading,
            align,
        } => {
            let chart = annual_chart(year);
            print_grid(&chart);
            if let Some(h) = heading {
                let o = grid_orientation(h, align || settings.align_to_heading);
                println!(
                    "Rotation: {:.1} deg (labels {:.1} deg)",
                    o.rotation_deg, o.label_rotation_deg
                );
            }
        }

        Commands::Star { number } => {
            print_star(require_star(number));
        }

        Commands::TaiSui { year, lookback } => {
            let config = require_birth_config(&settings, lookback);
            print_tai_sui(&tai_sui_report(year, &config));
        }

        Commands::BirthYears {
            sign,
            year,
            lookback,
        } => {
            let sign = parse_sign(&sign);
            let config = require_birth_config(&settings, lookback);
            let years = affected_birth_years_with(sign, year, &config);
            println!("{} ({}): {}", sign.glyph(), sign.name(), format_years(&years));
        }

        Commands::Chart { year, heading } => {
            let info = resolve_mountain(heading);
            print_mountain(&info);
            println!();
            let chart = annual_chart(year);
            print_grid(&chart);
            let o = grid_orientation(heading, settings.align_to_heading);
            println!(
                "Rotation: {:.1} deg (labels {:.1} deg)",
                o.rotation_deg, o.label_rotation_deg
            );
            let facing_star = chart.cell(info.direction()).star;
            println!(
                "Facing palace {} holds star {} ({})",
                info.direction().name(),
                facing_star,
                require_star(facing_star).name
            );
            println!();
            print_tai_sui(&tai_sui_report(year, &settings.birth_years));
        }
    }
}
