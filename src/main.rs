use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use golfweather::app::{Effect, Event, Gateways, Phase};
use golfweather::logging::init_logging;
use golfweather::{
    Coordinates, Course, FixedGeolocator, ForecastAggregator, GolfWeatherApp, GolfWeatherConfig,
    Language, MetNoClient, NominatimClient, OverpassClient, web,
};

mod cli;

use cli::{Cli, Command, TargetArgs};

type CliApp = GolfWeatherApp<FixedGeolocator, NominatimClient, OverpassClient, MetNoClient>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GolfWeatherConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    init_logging(&config.logging, cli.verbose);
    debug!("Loaded configuration: {:?}", config);

    let language = cli.lang.unwrap_or(config.defaults.language);

    match cli.cmd {
        Command::Check(target) => check(&config, language, &target).await,
        Command::Courses(target) => courses(&config, language, &target).await,
        Command::Forecast(position) => {
            forecast(&config, language, Coordinates::new(position.lat, position.lon)).await
        }
        Command::Serve { port } => {
            info!("Starting golfweather {} API on port {}", golfweather::VERSION, port);
            web::run(&config, port).await
        }
    }
}

fn build_app(
    config: &GolfWeatherConfig,
    language: Language,
    home: Option<Coordinates>,
) -> Result<CliApp> {
    let gateways = Gateways {
        geolocator: FixedGeolocator::new(home.or(config.defaults.home)),
        places: NominatimClient::new(&config.providers)?,
        courses: OverpassClient::new(&config.providers)?,
        weather: MetNoClient::new(&config.providers)?,
    };
    let aggregator = ForecastAggregator::new(config.thresholds, config.timezone()?);
    Ok(GolfWeatherApp::new(gateways, aggregator, language))
}

/// Locate or search, depending on what the user gave us
async fn locate(app: &mut CliApp, target: &TargetArgs) {
    match &target.place {
        Some(place) => app.search(place).await,
        None => app.locate().await,
    }
}

async fn check(config: &GolfWeatherConfig, language: Language, target: &TargetArgs) -> Result<()> {
    let mut app = build_app(config, language, target.position())?;
    locate(&mut app, target).await;

    println!("{}\n", app.status());
    println!("{}\n", app.course_list());
    print_forecast(&app);
    Ok(())
}

async fn courses(config: &GolfWeatherConfig, language: Language, target: &TargetArgs) -> Result<()> {
    let mut app = build_app(config, language, target.position())?;

    // Stop once the course list is in; the nearest course's forecast is not needed here
    let mut next = match &target.place {
        Some(place) => app.apply(Event::SearchSubmitted(place.clone())),
        None => app.apply(Event::LocationRequested),
    };
    while let Some(effect) = next {
        if matches!(effect, Effect::FetchForecast { .. }) {
            break;
        }
        let outcome = app.perform(effect).await;
        next = app.apply(outcome);
    }

    if app.state().courses.is_empty() {
        println!("{}\n", app.status());
    }
    println!("{}", app.course_list());
    Ok(())
}

async fn forecast(config: &GolfWeatherConfig, language: Language, position: Coordinates) -> Result<()> {
    let mut app = build_app(config, language, Some(position))?;
    app.select_course(Course {
        id: 0,
        name: Some(position.format_coordinates()),
        coordinates: position,
        distance_km: 0.0,
    })
    .await;

    println!("{}\n", app.status());
    print_forecast(&app);
    Ok(())
}

fn print_forecast(app: &CliApp) {
    if app.state().phase != Phase::Ready {
        return;
    }
    for card in app.forecast_cards() {
        println!("{card}");
    }
}
