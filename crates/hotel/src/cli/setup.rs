use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hotel", bin_name = "hotel", version, allow_negative_numbers = true)]
#[command(about = "Manage customer, hotel and reservation records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the JSON record files (default: current directory)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Customer records
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Hotel records
    #[command(subcommand)]
    Hotel(HotelCommands),

    /// Reservation records
    #[command(subcommand)]
    #[command(alias = "res")]
    Reservation(ReservationCommands),
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// Add a customer
    Create {
        name: String,
        email: String,
        phone: String,
    },
    /// Remove every customer with this name
    #[command(alias = "rm")]
    Delete { name: String },
    /// Show the first customer with this name
    Show { name: String },
    /// Change email and/or phone of the first customer with this name
    Modify {
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List all customers
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum HotelCommands {
    /// Add a hotel
    Create {
        name: String,
        location: String,
        rooms: i64,
    },
    /// Remove every hotel with this name
    #[command(alias = "rm")]
    Delete { name: String },
    /// Show the first hotel with this name
    Show { name: String },
    /// List all hotels
    #[command(alias = "ls")]
    List,
}

#[derive(Args, Debug)]
pub struct ReservationKeyArgs {
    pub customer: String,
    pub hotel: String,
    pub room: i64,
    pub check_in: String,
}

#[derive(Subcommand, Debug)]
pub enum ReservationCommands {
    /// Book a room
    Create {
        #[command(flatten)]
        key: ReservationKeyArgs,
        #[arg(long)]
        check_out: Option<String>,
    },
    /// Cancel the first reservation matching all four fields
    Cancel {
        #[command(flatten)]
        key: ReservationKeyArgs,
    },
    /// List all reservations
    #[command(alias = "ls")]
    List,
}
