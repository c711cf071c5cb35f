use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use domain::models::{LoginRequest, RegisterRequest, Session, UpdateProfileRequest};
use domain::services::markers::MarkerIcon;
use persistence::SessionStore;
use tracing::info;

use pettrack_client::api::ApiClient;
use pettrack_client::cli::{Cli, Command, NotificationsCommand, PetsCommand, ProfileCommand};
use pettrack_client::config::Config;
use pettrack_client::dashboard::Dashboard;
use pettrack_client::geo::FixedPositionProvider;
use pettrack_client::inbox::InboxView;
use pettrack_client::jobs::{JobScheduler, UnreadCountJob};
use pettrack_client::logging::init_logging;
use pettrack_client::reporter::{ReporterState, ScanReporter, SUCCESS_LINGER};

/// Pause after login before the first dashboard fetch, giving the
/// backend time to finish provisioning a fresh account.
const LOGIN_SETTLE: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config.logging);

    let sessions = match &config.session.file {
        Some(path) => SessionStore::at_path(path),
        None => SessionStore::new().context("Failed to locate session file")?,
    };
    let api = ApiClient::new(&config, sessions.clone())?;

    run(cli.command, api, &config, &sessions).await
}

async fn run(
    command: Command,
    api: ApiClient,
    config: &Config,
    sessions: &SessionStore,
) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let session = api.login(&LoginRequest { email, password }).await?;
            tokio::time::sleep(LOGIN_SETTLE).await;
            println!("Logged in as {} <{}>", session.nombre, session.email);
        }

        Command::Register {
            name,
            email,
            password,
            confirm,
        } => {
            if let Err(err) = shared::validation::validate_password_confirmation(&password, &confirm)
            {
                anyhow::bail!(
                    "{}",
                    err.message
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Passwords do not match".to_string())
                );
            }
            let request = RegisterRequest {
                nombre: name,
                email,
                password,
            };
            match api.register(&request).await? {
                Some(session) => {
                    tokio::time::sleep(LOGIN_SETTLE).await;
                    println!("Welcome, {}! You are now logged in.", session.nombre);
                }
                None => println!("Account created. Run `pettrack login` to sign in."),
            }
        }

        Command::Logout => {
            api.logout()?;
            println!("Logged out.");
        }

        Command::Pets { command } => {
            let session = require_session(sessions)?;
            let mut dashboard = Dashboard::new(api, config, &session.user_id);
            match command {
                PetsCommand::List => {
                    dashboard.load_pets().await?;
                    print_banner(dashboard.error());
                    if dashboard.pets().is_empty() {
                        println!("No pets registered yet.");
                    }
                    for pet in dashboard.pets() {
                        let photo = if pet.photo.is_some() { " [photo]" } else { "" };
                        println!("{}  {}{}", pet.id, pet.name, photo);
                    }
                }
                PetsCommand::Add { name, photo } => {
                    let photo = photo
                        .map(|path| shared::photo::encode_data_uri(&path))
                        .transpose()
                        .context("Failed to read photo")?;
                    dashboard.add_pet(&name, photo).await?;
                    println!("Registered {name}.");
                }
            }
        }

        Command::Locations { pet } => {
            let session = require_session(sessions)?;
            let mut dashboard = Dashboard::new(api, config, &session.user_id);
            dashboard.load_locations().await?;
            print_banner(dashboard.error());
            dashboard.select_pet(pet.as_deref());

            let markers = dashboard.markers();
            if markers.is_empty() {
                println!("No locations recorded yet.");
            }
            for marker in markers {
                let flag = match marker.icon {
                    MarkerIcon::Last => "  <- latest",
                    MarkerIcon::Normal => "",
                };
                println!(
                    "{}  {}  ({:.5}, {:.5}){}",
                    marker.record.created_at.format("%Y-%m-%d %H:%M"),
                    marker.record.pet_name,
                    marker.record.latitude,
                    marker.record.longitude,
                    flag
                );
            }
        }

        Command::Scan {
            pet_id,
            lat,
            lon,
            message,
            anonymous,
        } => {
            let pet = api.get_pet(&pet_id).await?;
            println!("Reporting a sighting of {}...", pet.name);

            let provider = FixedPositionProvider::new(lat, lon);
            let mut reporter = ScanReporter::new(api, &pet_id);
            match reporter.report(&provider, message, anonymous).await {
                ReporterState::Succeeded => {
                    println!("Thank you! {}'s owner has been notified.", pet.name);
                    tokio::time::sleep(SUCCESS_LINGER).await;
                }
                ReporterState::Failed { message } => anyhow::bail!("{message}"),
                _ => unreachable!("report always ends in a terminal state"),
            }
        }

        Command::Notifications { command } => {
            let session = require_session(sessions)?;
            let mut inbox = InboxView::new(api.clone(), &session.user_id);
            match command {
                NotificationsCommand::List => {
                    inbox.refresh().await?;
                    println!("{} unread", inbox.unread_count());
                    for n in inbox.notifications() {
                        let mark = if n.leido { " " } else { "*" };
                        println!("{mark} {}  {}  {}", n.id, n.created_at.format("%Y-%m-%d %H:%M"), n.message);
                        if let Some(place) = &n.location_info {
                            println!("    at {place}");
                        }
                        if let Some(text) = &n.user_message {
                            println!("    \"{text}\"");
                        }
                    }
                }
                NotificationsCommand::Read { notification_id } => {
                    inbox.refresh().await?;
                    inbox.mark_read(&notification_id).await?;
                    println!("Marked as read. {} unread.", inbox.unread_count());
                }
                NotificationsCommand::ReadAll => {
                    inbox.mark_all_read().await?;
                    println!("All notifications marked as read.");
                }
                NotificationsCommand::Count => {
                    let count = api.unread_count(&session.user_id).await?;
                    println!("{count}");
                }
                NotificationsCommand::Watch => {
                    watch_unread(api, &session, config).await?;
                }
            }
        }

        Command::Profile { command } => {
            let session = require_session(sessions)?;
            match command {
                ProfileCommand::Show => {
                    let profile = api.get_profile(&session.user_id).await?;
                    println!("Name:  {}", session.nombre);
                    println!("Email: {}", profile.email.as_deref().unwrap_or("-"));
                    println!("Phone: {}", profile.phone.as_deref().unwrap_or("-"));
                }
                ProfileCommand::Update { email, phone } => {
                    let request = UpdateProfileRequest { email, phone };
                    api.update_profile(&session.user_id, &request).await?;
                    println!("Profile updated.");
                }
            }
        }

        Command::Password {
            current,
            new,
            confirm,
        } => {
            let session = require_session(sessions)?;
            api.change_password(&session.user_id, &current, &new, &confirm)
                .await?;
            println!("Password changed.");
        }

        Command::Qr { pet_id } => {
            println!("{}", api.scan_url(&pet_id));
        }
    }

    Ok(())
}

/// Polls the unread count on the configured interval and prints every
/// change until Ctrl-C.
async fn watch_unread(api: ApiClient, session: &Session, config: &Config) -> anyhow::Result<()> {
    let (job, mut count_rx) =
        UnreadCountJob::new(api, &session.user_id, config.unread_interval());
    let mut scheduler = JobScheduler::new();
    scheduler.register(job);
    scheduler.start();

    info!(interval = ?config.unread_interval(), "Watching unread count");
    loop {
        tokio::select! {
            changed = count_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("Unread notifications: {}", *count_rx.borrow());
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(5)).await;
    Ok(())
}

fn require_session(sessions: &SessionStore) -> anyhow::Result<Session> {
    sessions
        .load()
        .context("Not logged in. Run `pettrack login` first.")
}

fn print_banner(error: Option<&str>) {
    if let Some(message) = error {
        eprintln!("! {message}");
    }
}
