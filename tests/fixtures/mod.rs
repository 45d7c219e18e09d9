//! Shared builders for integration tests.

use chrono::NaiveDate;
use contact_book::models::{AddressBook, Record};

/// Build a date, panicking on invalid input.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid test birthday");
    }
    record
}

/// A record that only has a birthday.
#[allow(dead_code)]
pub fn birthday_record(name: &str, birthday: &str) -> Record {
    sample_record(name, &[], Some(birthday))
}

/// A small book with a mix of phones and birthdays.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    vec![
        sample_record("John", &["1234567890", "5555555555"], Some("15.06.1990")),
        sample_record("Jane", &["0987654321"], None),
        sample_record("Bob", &[], Some("29.02.2000")),
    ]
    .into_iter()
    .collect()
}

/// Names in the book, in order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<String> {
    book.all().map(|r| r.name().to_string()).collect()
}
