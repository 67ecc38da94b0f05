//! console — smallest host for the ride-hail coordination core.
//!
//! Drives a [`Runtime`] from stdin commands and renders the map as log
//! lines instead of tiles.  Point it at a running fleet API (the default
//! is `http://localhost:8000`, override with `RIDE_API_URL`) and type
//! `help` for the command list.

use std::io::Write as _;

use anyhow::Result;

use tokio::io::{AsyncBufReadExt, BufReader};

use ride_core::{CarId, GeoPoint};
use ride_map::{Bounds, MapSurface, PointKind};
use ride_net::{ApiClient, NetConfig, Runtime, RuntimeHandle};
use ride_session::Event;

// ── Constants ─────────────────────────────────────────────────────────────────

// There is no GPS on a terminal; stand in for the first location fix with
// a fixed point in central Casablanca, matching the fleet sim's home area.
const SYNTHETIC_FIX: GeoPoint = GeoPoint {
    lat: 33.5731,
    lng: -7.5898,
};

const HELP: &str = "\
commands:
  pickup              start choosing a pickup point
  dropoff             start choosing a dropoff point
  cancel              leave selection mode
  click <lat> <lng>   tap the map at a coordinate
  clear               clear the dropoff point
  car <id>            tap a vehicle marker
  chat <message>      send a message to the assistant
  spawn <lat> <lng> <lat> <lng>
                      spawn a sim vehicle travelling start -> end
  reset               reset the fleet simulation
  quit                exit
";

// ── Console map surface ───────────────────────────────────────────────────────

/// Renders every map mutation as a line on stdout.
///
/// Useful both as a demo and as a trace of what a real tile surface
/// would be asked to do for the same session.
#[derive(Default)]
struct ConsoleSurface;

impl MapSurface for ConsoleSurface {
    fn place_user(&mut self, at: GeoPoint) {
        println!("[map] user marker at ({:.4}, {:.4})", at.lat, at.lng);
    }

    fn move_user(&mut self, to: GeoPoint) {
        println!("[map] user marker -> ({:.4}, {:.4})", to.lat, to.lng);
    }

    fn place_point(&mut self, kind: PointKind, at: GeoPoint) {
        println!("[map] {kind:?} marker at ({:.4}, {:.4})", at.lat, at.lng);
    }

    fn move_point(&mut self, kind: PointKind, to: GeoPoint) {
        println!("[map] {kind:?} marker -> ({:.4}, {:.4})", to.lat, to.lng);
    }

    fn remove_point(&mut self, kind: PointKind) {
        println!("[map] {kind:?} marker removed");
    }

    fn add_vehicle(&mut self, id: &CarId, at: GeoPoint, heading_deg: f64, selected: bool) {
        println!(
            "[map] + vehicle {id} at ({:.4}, {:.4}) heading {heading_deg:.0}{}",
            at.lat,
            at.lng,
            if selected { " [selected]" } else { "" },
        );
    }

    fn update_vehicle(&mut self, id: &CarId, at: GeoPoint, heading_deg: f64, selected: bool) {
        println!(
            "[map] ~ vehicle {id} at ({:.4}, {:.4}) heading {heading_deg:.0}{}",
            at.lat,
            at.lng,
            if selected { " [selected]" } else { "" },
        );
    }

    fn remove_vehicle(&mut self, id: &CarId) {
        println!("[map] - vehicle {id}");
    }

    fn set_route(&mut self, coordinates: &[[f64; 2]]) {
        println!("[map] route drawn, {} points", coordinates.len());
    }

    fn clear_route(&mut self) {
        println!("[map] route cleared");
    }

    fn fly_to(&mut self, center: GeoPoint) {
        println!("[map] fly to ({:.4}, {:.4})", center.lat, center.lng);
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        println!(
            "[map] fit bounds ({:.4}, {:.4})..({:.4}, {:.4})",
            bounds.south, bounds.west, bounds.north, bounds.east,
        );
    }
}

// ── Command parsing ───────────────────────────────────────────────────────────

enum Command {
    Event(Event),
    Spawn { start: GeoPoint, end: GeoPoint },
    Reset,
    Help,
    Quit,
    Unknown,
}

fn parse(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Command::Unknown;
    };

    match word {
        "pickup" => Command::Event(Event::BeginPickupSelect),
        "dropoff" => Command::Event(Event::BeginDropoffSelect),
        "cancel" => Command::Event(Event::CancelSelect),
        "clear" => Command::Event(Event::ClearDropoff),
        "click" => match (parse_f64(parts.next()), parse_f64(parts.next())) {
            (Some(lat), Some(lng)) => Command::Event(Event::MapClick(GeoPoint::new(lat, lng))),
            _ => Command::Unknown,
        },
        "car" => match parts.next() {
            Some(id) => Command::Event(Event::VehicleTapped(CarId::from(id))),
            None => Command::Unknown,
        },
        "chat" => {
            let message = line.trim_start().trim_start_matches("chat").trim();
            if message.is_empty() {
                Command::Unknown
            } else {
                Command::Event(Event::ChatCommand(message.to_string()))
            }
        }
        "spawn" => {
            let coords: Vec<f64> = parts.filter_map(|p| p.parse().ok()).collect();
            match coords[..] {
                [a, b, c, d] => Command::Spawn {
                    start: GeoPoint::new(a, b),
                    end: GeoPoint::new(c, d),
                },
                _ => Command::Unknown,
            }
        }
        "reset" => Command::Reset,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

fn parse_f64(part: Option<&str>) -> Option<f64> {
    part.and_then(|p| p.parse().ok())
}

// ── Stdin loop ────────────────────────────────────────────────────────────────

async fn read_commands(handle: RuntimeHandle, client: ApiClient) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Ok(Some(line)) = lines.next_line().await {
        match parse(&line) {
            Command::Event(event) => {
                handle.send(event);
            }
            Command::Spawn { start, end } => {
                if let Err(e) = client.spawn_car(start, end, None).await {
                    eprintln!("spawn failed: {e}");
                }
            }
            Command::Reset => {
                if let Err(e) = client.reset_simulation().await {
                    eprintln!("reset failed: {e}");
                }
            }
            Command::Help => print!("{HELP}"),
            Command::Quit => break,
            Command::Unknown => println!("unrecognized command, try `help`"),
        }
        prompt();
    }

    handle.shutdown();
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let config = NetConfig::from_env();
    println!("=== console — ride-hail coordination demo ===");
    println!("Fleet API: {}", config.base_url);
    println!();
    print!("{HELP}");
    println!();

    let client = ApiClient::new(&config)?;
    let mut runtime = Runtime::new(client.clone(), ConsoleSurface, config.poll_period);
    let handle = runtime.handle();
    log::info!(
        "runtime starting against {} (poll every {:?})",
        config.base_url,
        config.poll_period
    );

    // Seed the session as a browser would after geolocation resolves.
    handle.send(Event::LocationFix(SYNTHETIC_FIX));

    let reader = tokio::spawn(read_commands(handle, client));
    runtime.run().await;
    reader.abort();
    log::info!("runtime stopped");

    Ok(())
}
