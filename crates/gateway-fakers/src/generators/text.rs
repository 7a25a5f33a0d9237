//! Text value generators: names, contact data and merchant categories.

use rand::Rng;

pub const FIRST_NAMES: &[&str] = &[
    "Alexander", "Anna", "Dmitry", "Elena", "Ivan", "Maria", "Mikhail", "Natalia", "Nikita",
    "Olga", "Pavel", "Sofia", "Sergey", "Tatiana", "Viktor", "Yulia",
];

pub const LAST_NAMES: &[&str] = &[
    "Ivanov", "Petrov", "Sidorov", "Smirnov", "Kuznetsov", "Popov", "Vasiliev", "Sokolov",
    "Mikhailov", "Novikov", "Fedorov", "Morozov", "Volkov", "Alekseev", "Lebedev", "Egorov",
];

pub const MIDDLE_NAMES: &[&str] = &[
    "Alexandrovich", "Dmitrievich", "Ivanovich", "Mikhailovich", "Sergeevich", "Pavlovna",
    "Viktorovna", "Nikolaevna", "Andreevna", "Petrovna",
];

/// Merchant categories accepted by the operations service.
pub const CATEGORIES: &[&str] = &[
    "gas",
    "taxi",
    "tolls",
    "water",
    "beauty",
    "mobile",
    "travel",
    "parking",
    "catalog",
    "internet",
    "satellite",
    "education",
    "government",
    "healthcare",
    "restaurants",
    "electricity",
    "supermarkets",
];

/// Pick one entry of a non-empty pool.
pub fn pick<R: Rng>(rng: &mut R, pool: &[&str]) -> String {
    pool[rng.random_range(0..pool.len())].to_string()
}

/// Generate an e-mail address that is unique per call.
pub fn generate_email<R: Rng>(rng: &mut R) -> String {
    format!("{}@example.com", super::uuid::generate_uuid_v4(rng).simple())
}

/// Generate a `+7` phone number followed by ten digits, first digit non-zero.
pub fn generate_phone_number<R: Rng>(rng: &mut R) -> String {
    let mut result = String::with_capacity(12);
    result.push_str("+7");
    result.push(digit(rng.random_range(1..10)));
    for _ in 1..10 {
        result.push(digit(rng.random_range(0..10)));
    }
    result
}

fn digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}
