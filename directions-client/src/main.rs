use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use directions_client::directions::mock::MockTransport;
use directions_client::directions::{DirectionsClient, HttpTransportConfig, Transport};
use directions_client::domain::{
    DrivingOptions, TrafficModel, TransitMode, TransitOptions, TransitRoutingPreference,
    TravelMode, Units, WalkingOptions, Waypoint, WaypointTime,
};
use directions_client::request::DirectionsRequest;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl Mode {
    fn name(self) -> &'static str {
        match self {
            Mode::Driving => "driving",
            Mode::Walking => "walking",
            Mode::Bicycling => "bicycling",
            Mode::Transit => "transit",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Avoid {
    Tolls,
    Highways,
    Ferries,
    Indoor,
}

#[derive(Clone, Copy, ValueEnum)]
enum TrafficArg {
    BestGuess,
    Pessimistic,
    Optimistic,
}

impl From<TrafficArg> for TrafficModel {
    fn from(arg: TrafficArg) -> Self {
        match arg {
            TrafficArg::BestGuess => TrafficModel::BestGuess,
            TrafficArg::Pessimistic => TrafficModel::Pessimistic,
            TrafficArg::Optimistic => TrafficModel::Optimistic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TransitArg {
    Bus,
    Subway,
    Train,
    Tram,
    Rail,
}

impl From<TransitArg> for TransitMode {
    fn from(arg: TransitArg) -> Self {
        match arg {
            TransitArg::Bus => TransitMode::Bus,
            TransitArg::Subway => TransitMode::Subway,
            TransitArg::Train => TransitMode::Train,
            TransitArg::Tram => TransitMode::Tram,
            TransitArg::Rail => TransitMode::Rail,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RoutingArg {
    FewerTransfers,
    LessWalking,
}

impl From<RoutingArg> for TransitRoutingPreference {
    fn from(arg: RoutingArg) -> Self {
        match arg {
            RoutingArg::FewerTransfers => TransitRoutingPreference::FewerTransfers,
            RoutingArg::LessWalking => TransitRoutingPreference::LessWalking,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Metric,
    Imperial,
}

/// Build a directions request URL and optionally send it.
///
/// Waypoints are written as `place_id:<id>`, `<lat>,<lng>`, or a free-text
/// address.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    origin: String,

    destination: String,

    /// API key
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    key: String,

    #[arg(short, long, value_enum, default_value_t = Mode::Driving)]
    mode: Mode,

    /// Feature to avoid (repeatable): tolls, highways, ferries when
    /// driving; indoor when walking
    #[arg(long, value_enum)]
    avoid: Vec<Avoid>,

    /// Traffic model for driving routes
    #[arg(long, value_enum)]
    traffic_model: Option<TrafficArg>,

    /// Departure time in seconds since the Unix epoch (driving, transit)
    #[arg(long, value_name = "EPOCH_SECS", allow_hyphen_values = true)]
    depart_at: Option<i64>,

    /// Arrival time in seconds since the Unix epoch (transit)
    #[arg(
        long,
        value_name = "EPOCH_SECS",
        allow_hyphen_values = true,
        conflicts_with = "depart_at"
    )]
    arrive_by: Option<i64>,

    /// Allowed transit vehicle (repeatable)
    #[arg(long = "transit-mode", value_enum)]
    transit_modes: Vec<TransitArg>,

    /// Transit routing preference
    #[arg(long, value_enum)]
    routing_preference: Option<RoutingArg>,

    /// Stop on the route (repeatable, kept in order)
    #[arg(long = "stop")]
    stops: Vec<String>,

    /// Pass-through point (repeatable, kept in order, added after stops)
    #[arg(long)]
    via: Vec<String>,

    #[arg(long)]
    optimize: bool,

    #[arg(long)]
    alternatives: bool,

    #[arg(long, value_enum)]
    units: Option<UnitsArg>,

    #[arg(long)]
    region: Option<String>,

    #[arg(long)]
    language: Option<String>,

    /// Send the request and print a route summary
    #[arg(long)]
    fetch: bool,

    /// Serve the response from a saved JSON file instead of the network
    #[arg(long)]
    mock: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn parse_waypoint(s: &str) -> anyhow::Result<Waypoint> {
    if let Some(id) = s.strip_prefix("place_id:") {
        return Ok(Waypoint::place_id(id)?);
    }
    if let Some((lat, lng)) = s.split_once(',') {
        if let (Ok(lat), Ok(lng)) = (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) {
            return Ok(Waypoint::coordinate(lat, lng)?);
        }
    }
    Ok(Waypoint::address(s)?)
}

fn ensure_unset(cli: &Cli, set: bool, flag: &str) -> anyhow::Result<()> {
    if set {
        bail!("--{flag} does not apply to {} routes", cli.mode.name());
    }
    Ok(())
}

fn build_travel_mode(cli: &Cli) -> anyhow::Result<TravelMode> {
    let avoids = |a: Avoid| cli.avoid.contains(&a);
    let road_avoid = avoids(Avoid::Tolls) || avoids(Avoid::Highways) || avoids(Avoid::Ferries);
    let transit_only = !cli.transit_modes.is_empty() || cli.routing_preference.is_some();
    let timed = cli.depart_at.is_some() || cli.arrive_by.is_some();

    let mode = match cli.mode {
        Mode::Driving => {
            ensure_unset(cli, avoids(Avoid::Indoor), "avoid indoor")?;
            ensure_unset(cli, cli.arrive_by.is_some(), "arrive-by")?;
            ensure_unset(cli, transit_only, "transit-mode/--routing-preference")?;

            let mut options = DrivingOptions::new();
            if let Some(secs) = cli.depart_at {
                options = options.departing_at_epoch(secs);
            }
            if avoids(Avoid::Tolls) {
                options = options.avoid_tolls();
            }
            if avoids(Avoid::Highways) {
                options = options.avoid_highways();
            }
            if avoids(Avoid::Ferries) {
                options = options.avoid_ferries();
            }
            if let Some(model) = cli.traffic_model {
                options = options.with_traffic_model(model.into());
            }
            TravelMode::Driving(options)
        }
        Mode::Walking => {
            ensure_unset(cli, road_avoid, "avoid tolls/highways/ferries")?;
            ensure_unset(cli, cli.traffic_model.is_some(), "traffic-model")?;
            ensure_unset(cli, timed, "depart-at/--arrive-by")?;
            ensure_unset(cli, transit_only, "transit-mode/--routing-preference")?;

            let mut options = WalkingOptions::new();
            if avoids(Avoid::Indoor) {
                options = options.avoid_indoor();
            }
            TravelMode::Walking(options)
        }
        Mode::Bicycling => {
            ensure_unset(cli, !cli.avoid.is_empty(), "avoid")?;
            ensure_unset(cli, cli.traffic_model.is_some(), "traffic-model")?;
            ensure_unset(cli, timed, "depart-at/--arrive-by")?;
            ensure_unset(cli, transit_only, "transit-mode/--routing-preference")?;
            TravelMode::Bicycling
        }
        Mode::Transit => {
            ensure_unset(cli, !cli.avoid.is_empty(), "avoid")?;
            ensure_unset(cli, cli.traffic_model.is_some(), "traffic-model")?;

            let mut options = TransitOptions::new()
                .with_modes(cli.transit_modes.iter().map(|&m| TransitMode::from(m)));
            if let Some(secs) = cli.depart_at {
                options = options.with_time(WaypointTime::Departure(secs));
            }
            if let Some(secs) = cli.arrive_by {
                options = options.with_time(WaypointTime::Arrival(secs));
            }
            if let Some(pref) = cli.routing_preference {
                options = options.with_routing_preference(pref.into());
            }
            TravelMode::Transit(options)
        }
    };
    Ok(mode)
}

fn build_request(cli: &Cli) -> anyhow::Result<DirectionsRequest> {
    let mode = build_travel_mode(cli)?;

    let stops = cli
        .stops
        .iter()
        .map(|s| parse_waypoint(s))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let via = cli
        .via
        .iter()
        .map(|s| parse_waypoint(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut request = DirectionsRequest::with_travel_mode(
        cli.key.as_str(),
        parse_waypoint(&cli.origin).context("invalid origin")?,
        parse_waypoint(&cli.destination).context("invalid destination")?,
        mode,
    )?
    .visiting_all(stops)
    .via_all(via);

    if cli.optimize {
        request = request.optimize_waypoints();
    }
    if cli.alternatives {
        request = request.provide_alternatives();
    }
    if let Some(units) = cli.units {
        request = request.units(match units {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        });
    }
    if let Some(region) = &cli.region {
        request = request.region(region.as_str());
    }
    if let Some(language) = &cli.language {
        request = request.language(language.as_str());
    }

    Ok(request)
}

async fn print_routes<T: Transport>(
    client: &DirectionsClient<T>,
    request: &DirectionsRequest,
) -> anyhow::Result<()> {
    let response = client.directions(request).await?;
    info!(routes = response.routes.len(), "received directions");

    for (i, route) in response.routes.iter().enumerate() {
        let geometry_bytes = route
            .overview_polyline
            .as_ref()
            .map_or(0, |p| p.points.len());
        println!(
            "{}. {}: {} m, {} s, {} legs, {} bytes of overview geometry",
            i + 1,
            route.summary,
            route.distance_meters(),
            route.duration_secs(),
            route.legs.len(),
            geometry_bytes
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let request = build_request(&cli)?;

    println!("{}", request.to_request_url());

    if let Some(path) = &cli.mock {
        let client = DirectionsClient::new(MockTransport::from_file(path)?);
        print_routes(&client, &request).await?;
    } else if cli.fetch {
        let config = HttpTransportConfig::new().with_timeout(cli.timeout_secs);
        let client = DirectionsClient::http(config)?;
        print_routes(&client, &request).await?;
    }

    Ok(())
}
