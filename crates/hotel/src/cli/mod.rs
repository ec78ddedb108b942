//! # CLI Layer
//!
//! The only place that knows about the terminal. It parses arguments,
//! builds the [`HotelApi`], dispatches, and hands results to [`render`].
//! Errors bubble up as `anyhow` and become exit status 1 in `main`.

mod render;
mod setup;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use hotelapp::api::HotelApi;
use hotelapp::config::HotelConfig;
use hotelapp::model::{Reservation, ReservationKey};
use hotelapp::store::fs_backend::FsBackend;
use setup::{Cli, Commands, CustomerCommands, HotelCommands, ReservationCommands, ReservationKeyArgs};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cwd = std::env::current_dir().context("Could not determine working directory")?;
    let mut config = HotelConfig::load(&cwd)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    log::debug!("Using data dir {}", config.data_dir.display());

    let api = HotelApi::from_config(&config);

    match cli.command {
        Commands::Customer(cmd) => customer(&api, cmd),
        Commands::Hotel(cmd) => hotel(&api, cmd),
        Commands::Reservation(cmd) => reservation(&api, cmd),
    }
}

fn customer(api: &HotelApi<FsBackend>, cmd: CustomerCommands) -> Result<()> {
    match cmd {
        CustomerCommands::Create { name, email, phone } => {
            let result = api.create_customer(&name, &email, &phone)?;
            render::print_created_customers(&result.customers);
        }
        CustomerCommands::Delete { name } => {
            render::print_result(&api.delete_customer(&name)?);
        }
        CustomerCommands::Show { name } => {
            render::print_result(&api.display_customer(&name)?);
        }
        CustomerCommands::Modify { name, email, phone } => {
            let result = api.modify_customer(&name, email.as_deref(), phone.as_deref())?;
            render::print_result(&result);
        }
        CustomerCommands::List => render::print_customers(&api.customers()?),
    }
    Ok(())
}

fn hotel(api: &HotelApi<FsBackend>, cmd: HotelCommands) -> Result<()> {
    match cmd {
        HotelCommands::Create {
            name,
            location,
            rooms,
        } => {
            let (_, result) = api.create_hotel(&name, &location, rooms)?;
            render::print_created_hotels(&result.hotels);
        }
        HotelCommands::Delete { name } => {
            render::print_result(&api.delete_hotel(&name)?);
        }
        HotelCommands::Show { name } => match api.find_hotel(&name)? {
            Some(hotel) => render::print_result(&hotel.display_info()),
            None => render::print_not_found(&format!("Hotel {} not found.", name)),
        },
        HotelCommands::List => render::print_hotels(&api.hotels()?),
    }
    Ok(())
}

fn reservation(api: &HotelApi<FsBackend>, cmd: ReservationCommands) -> Result<()> {
    match cmd {
        ReservationCommands::Create { key, check_out } => {
            let reservation = Reservation::new(
                key.customer,
                key.hotel,
                key.room,
                key.check_in,
                check_out,
            );
            let result = api.create_reservation(reservation)?;
            render::print_created_reservations(&result.reservations);
        }
        ReservationCommands::Cancel { key } => {
            render::print_result(&api.cancel_reservation(&to_key(key))?);
        }
        ReservationCommands::List => render::print_reservations(&api.reservations()?),
    }
    Ok(())
}

fn to_key(args: ReservationKeyArgs) -> ReservationKey {
    ReservationKey::new(args.customer, args.hotel, args.room, args.check_in)
}
