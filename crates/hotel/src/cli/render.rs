use console::style;
use hotelapp::commands::{CmdMessage, CmdResult, MessageLevel};
use hotelapp::model::{Customer, HotelRecord, Reservation};

/// Print the user-channel messages of a result. Log-channel messages were
/// already emitted by the library.
pub(super) fn print_result(result: &CmdResult) {
    for message in result.user_messages() {
        print_message(message);
    }
}

pub(super) fn print_not_found(text: &str) {
    println!("{}", style(text).dim());
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", style(&message.content).dim()),
        MessageLevel::Success => println!("{}", style(&message.content).green()),
        MessageLevel::Warning => println!("{}", style(&message.content).yellow()),
    }
}

pub(super) fn print_created_customers(customers: &[Customer]) {
    for c in customers {
        println!("{} {}", style("Customer created:").green(), c.name);
    }
}

pub(super) fn print_created_hotels(hotels: &[HotelRecord]) {
    for h in hotels {
        println!("{} {}", style("Hotel created:").green(), h.name);
    }
}

pub(super) fn print_created_reservations(reservations: &[Reservation]) {
    for r in reservations {
        println!("{} {}", style("Reservation created:").green(), r);
    }
}

pub(super) fn print_customers(customers: &[Customer]) {
    if customers.is_empty() {
        println!("No customers found.");
        return;
    }
    for c in customers {
        println!("{}  {}  {}", style(&c.name).bold(), c.email, c.phone);
    }
}

pub(super) fn print_hotels(hotels: &[HotelRecord]) {
    if hotels.is_empty() {
        println!("No hotels found.");
        return;
    }
    for h in hotels {
        println!("{}  {}  {} rooms", style(&h.name).bold(), h.location, h.rooms);
    }
}

pub(super) fn print_reservations(reservations: &[Reservation]) {
    if reservations.is_empty() {
        println!("No reservations found.");
        return;
    }
    for r in reservations {
        println!("{}", r);
    }
}
