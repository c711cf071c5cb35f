//! Command-line interface definition.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pettrack", version, about = "Track your pets through QR scans")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must match --password
        #[arg(long)]
        confirm: String,
    },
    /// Destroy the local session
    Logout,
    /// Manage your pets
    Pets {
        #[command(subcommand)]
        command: PetsCommand,
    },
    /// Show the location feed, most recent last
    Locations {
        /// Only show locations for this pet
        #[arg(long)]
        pet: Option<String>,
    },
    /// Report a found pet's position (no account needed)
    Scan {
        pet_id: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Message for the owner
        #[arg(long)]
        message: Option<String>,
        /// Withhold your identity from the owner
        #[arg(long)]
        anonymous: bool,
    },
    /// Manage notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationsCommand,
    },
    /// Show or update your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Change your password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Print the scan-page URL embedded in a pet's QR code
    Qr { pet_id: String },
}

#[derive(Subcommand, Debug)]
pub enum PetsCommand {
    /// List your registered pets
    List,
    /// Register a new pet
    Add {
        #[arg(long)]
        name: String,
        /// Path to a photo, embedded as a data URI (max 5 MB)
        #[arg(long)]
        photo: Option<std::path::PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// List notifications, unread first
    List,
    /// Mark one notification as read
    Read { notification_id: String },
    /// Mark every notification as read
    ReadAll,
    /// Print the unread count once
    Count,
    /// Poll the unread count until interrupted
    Watch,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the stored profile
    Show,
    /// Update email and phone
    Update {
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
    },
}
