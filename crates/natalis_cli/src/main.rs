use clap::{Parser, Subcommand};
use natalis_base::{
    ALL_BODIES, CelestialBody, SignAttributeTable, WeightTable, deg_to_dms, ordinal,
    sign_from_longitude,
};
use natalis_chart::{
    BodyState, Chart, HouseCusps, HousePolicy, aspects_of, build_chart, classify_aspect,
    house_number, moon_phase,
};
use natalis_report::{ascendant_line, boundary_note, position_lines, sign_rows};
use natalis_stats::{ChartStatistics, DistributionKind, balance_label};

#[derive(Parser)]
#[command(name = "natalis", about = "Natal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign from ecliptic longitude
    Sign {
        /// Tropical ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// House containing a longitude
    House {
        /// Tropical ecliptic longitude in degrees
        lon: f64,
        /// Twelve house cusp longitudes, comma separated
        #[arg(long)]
        cusps: String,
        /// Apply the 5-degree next-house allowance
        #[arg(long)]
        effective: bool,
    },
    /// Classify the aspect between two longitudes
    Aspect {
        /// First longitude in degrees
        lon1: f64,
        /// Second longitude in degrees
        lon2: f64,
    },
    /// Moon phase from Sun and Moon longitudes
    MoonPhase {
        /// Sun longitude in degrees
        sun: f64,
        /// Moon longitude in degrees
        moon: f64,
    },
    /// English ordinal for a house number
    Ordinal {
        number: u32,
    },
    /// Build a full chart and print its report
    Chart {
        /// Twelve house cusp longitudes, comma separated
        #[arg(long)]
        cusps: String,
        /// Ascendant longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Midheaven longitude in degrees
        #[arg(long)]
        mc: f64,
        /// Body position as Name=lon or Name=lon:speed (repeatable)
        #[arg(long = "body")]
        bodies: Vec<String>,
    },
}

fn parse_cusps(s: &str) -> [f64; 12] {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 12 {
        eprintln!("Expected 12 comma-separated cusps, got {}", parts.len());
        std::process::exit(1);
    }
    let mut cusps = [0.0; 12];
    for (i, p) in parts.iter().enumerate() {
        match p.parse::<f64>() {
            Ok(v) => cusps[i] = v,
            Err(_) => {
                eprintln!("Invalid cusp longitude: {p}");
                std::process::exit(1);
            }
        }
    }
    cusps
}

/// Resolves a body name to the ephemeris set. Angles and derived
/// points are not accepted; the builder places those itself.
fn ephemeris_body_from_name(s: &str) -> Option<CelestialBody> {
    let wanted = s.to_lowercase().replace([' ', '-', '_'], "");
    natalis_base::EPHEMERIS_BODIES
        .iter()
        .copied()
        .find(|b| b.name().to_lowercase().replace(' ', "") == wanted)
}

fn parse_body_name(s: &str) -> CelestialBody {
    match ephemeris_body_from_name(s) {
        Some(body) => body,
        None => {
            eprintln!("Invalid body name: {s}");
            eprintln!(
                "Valid: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, \
                 Pluto, NorthNode, Lilith, Chiron"
            );
            std::process::exit(1);
        }
    }
}

fn parse_body_spec(spec: &str) -> (CelestialBody, BodyState) {
    let Some((name, rest)) = spec.split_once('=') else {
        eprintln!("Invalid body spec: {spec} (expected Name=lon or Name=lon:speed)");
        std::process::exit(1);
    };
    let body = parse_body_name(name);
    let (lon_str, speed_str) = match rest.split_once(':') {
        Some((l, s)) => (l, Some(s)),
        None => (rest, None),
    };
    let lon = match lon_str.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid longitude in body spec: {spec}");
            std::process::exit(1);
        }
    };
    let speed = match speed_str {
        Some(s) => match s.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Invalid speed in body spec: {spec}");
                std::process::exit(1);
            }
        },
        None => 0.0,
    };
    (body, BodyState::new(lon, speed))
}

fn print_two_way(name: &str, stats: &ChartStatistics<'_>, kind: DistributionKind) {
    let d = stats.distribution(kind);
    let entries = d.entries();
    println!(
        "{name}: {} {}% / {} {}% ({})",
        entries[0].0,
        entries[0].1,
        entries[1].0,
        entries[1].1,
        balance_label(entries[0].1, entries[0].0, entries[1].0)
    );
}

fn print_many_way(name: &str, stats: &ChartStatistics<'_>, kind: DistributionKind) {
    let d = stats.distribution(kind);
    let parts: Vec<String> = d
        .entries()
        .iter()
        .map(|(label, pct)| format!("{label} {pct}%"))
        .collect();
    println!("{name}: {} (primary: {})", parts.join(", "), d.primary());
}

fn print_chart_report(chart: &Chart) {
    println!("PLANETARY POSITIONS");
    println!("==================================================");
    for line in position_lines(chart) {
        println!("{line}");
    }
    if let Some(line) = ascendant_line(chart) {
        println!();
        println!("{line}");
    }

    println!();
    println!("Moon phase: {}", chart.moon_phase().name());
    println!(
        "Chart sect: {}",
        if chart.is_day_chart() { "Day" } else { "Night" }
    );

    println!();
    println!("SIGN SUMMARY");
    println!("==================================================");
    for row in sign_rows(chart) {
        let house = match row.house {
            Some(h) => ordinal(h as u32),
            None => "-".to_string(),
        };
        println!("{:<12} {:<20} {house}", row.sign.name(), row.cell_text());
    }
    if let Some(note) = boundary_note(chart) {
        println!();
        println!("{note}");
    }

    println!();
    println!("ASPECTS");
    println!("==================================================");
    for subject in ALL_BODIES {
        let aspects = aspects_of(chart, subject);
        if aspects.is_empty() {
            continue;
        }
        let parts: Vec<String> = aspects
            .iter()
            .map(|(other, aspect)| format!("{} {}", aspect.name(), other.name()))
            .collect();
        println!("{}: {}", subject.name(), parts.join(", "));
    }

    let weights = WeightTable::classical();
    let attrs = SignAttributeTable::classical();
    let stats = ChartStatistics::new(chart, &weights, &attrs);

    println!();
    println!("DISTRIBUTIONS");
    println!("==================================================");
    print_two_way("Hemisphere", &stats, DistributionKind::Hemisphere);
    print_two_way("East-West", &stats, DistributionKind::EastWest);
    let q = stats.qualities();
    let t = q.temperature.entries();
    let m = q.moisture.entries();
    println!(
        "Temperature: {} {}% / {} {}% ({})",
        t[0].0,
        t[0].1,
        t[1].0,
        t[1].1,
        balance_label(t[0].1, t[0].0, t[1].0)
    );
    println!(
        "Moisture: {} {}% / {} {}% ({})",
        m[0].0,
        m[0].1,
        m[1].0,
        m[1].1,
        balance_label(m[0].1, m[0].0, m[1].0)
    );
    let parts: Vec<String> = q
        .primitive
        .entries()
        .iter()
        .map(|(label, pct)| format!("{label} {pct}%"))
        .collect();
    println!(
        "Qualities: {} (status: {})",
        parts.join(", "),
        q.combined_label()
    );
    print_many_way("Temperaments", &stats, DistributionKind::Temperaments);
    print_many_way("Elements", &stats, DistributionKind::Elements);
    print_many_way("Modalities", &stats, DistributionKind::Modalities);
    print_two_way("Polarities", &stats, DistributionKind::Polarities);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { lon } => {
            let info = sign_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} (index {}) - {} deg {} min {:.1} sec ({:.4} deg in sign)",
                info.sign.name(),
                info.sign_index,
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_sign
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            println!(
                "{} deg {} min {:.4} sec",
                dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::House {
            lon,
            cusps,
            effective,
        } => {
            let cusps = HouseCusps::new(parse_cusps(&cusps));
            let policy = if effective {
                HousePolicy::Effective
            } else {
                HousePolicy::Geometric
            };
            match house_number(lon, &cusps, policy) {
                Ok(house) => println!("{} House", ordinal(house as u32)),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Aspect { lon1, lon2 } => match classify_aspect(lon1, lon2) {
            Some(aspect) => println!("{}", aspect.name()),
            None => println!("None"),
        },

        Commands::MoonPhase { sun, moon } => {
            println!("{}", moon_phase(sun, moon).name());
        }

        Commands::Ordinal { number } => {
            println!("{}", ordinal(number));
        }

        Commands::Chart {
            cusps,
            asc,
            mc,
            bodies,
        } => {
            let cusps = parse_cusps(&cusps);
            let states: Vec<(CelestialBody, BodyState)> =
                bodies.iter().map(|s| parse_body_spec(s)).collect();
            match build_chart(Some(cusps), asc, mc, &states) {
                Ok(chart) => print_chart_report(&chart),
                Err(e) => {
                    eprintln!("Failed to build chart: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
