//! Embedded name and address corpora used by the profile factory

pub(crate) const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
    "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Sandra", "Margaret", "Ashley", "Kimberly",
    "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Laura", "Sharon", "Cynthia", "Kathleen", "Amy", "Angela", "Shirley",
    "Anna", "Brenda", "Pamela", "Emma", "Nicole", "Helen", "Samantha", "Katherine",
    "Christine", "Debra", "Rachel", "Carolyn", "Janet", "Maria", "Olivia", "Heather",
    "Mary Ann", "Ana Sofia",
];

pub(crate) const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph",
    "Thomas", "Christopher", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Donald",
    "Steven", "Andrew", "Paul", "Joshua", "Kenneth", "Kevin", "Brian", "George",
    "Timothy", "Ronald", "Jason", "Edward", "Jeffrey", "Ryan", "Jacob", "Gary",
    "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin", "Scott", "Brandon",
    "Benjamin", "Samuel", "Gregory", "Alexander", "Patrick", "Frank", "Raymond", "Jack",
    "Dennis", "Jerry", "Juan Carlos",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
    "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
    "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz", "Parker",
    "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales", "Murphy",
    "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson", "Bailey",
    "Reed", "Kelly", "Howard", "Van Buren", "De La Cruz",
];

pub(crate) const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way",
    "Terrace", "Circle", "Trail", "Parkway", "Ridge", "Crossing", "Square", "Plaza",
    "Heights", "Hollow", "Run",
];

pub(crate) const CITY_PREFIXES: &[&str] =
    &["North", "East", "West", "South", "New", "Lake", "Port"];

pub(crate) const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port",
    "mouth", "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

/// State or territory abbreviation with its inclusive zipcode range
pub(crate) const STATE_ZIP_RANGES: &[(&str, u32, u32)] = &[
    ("AL", 35004, 36925),
    ("AK", 99501, 99950),
    ("AZ", 85001, 86556),
    ("AR", 71601, 72959),
    ("CA", 90001, 96162),
    ("CO", 80001, 81658),
    ("CT", 6001, 6389),
    ("DE", 19701, 19980),
    ("DC", 20001, 20039),
    ("FL", 32004, 34997),
    ("GA", 30001, 31999),
    ("HI", 96701, 96898),
    ("ID", 83201, 83876),
    ("IL", 60001, 62999),
    ("IN", 46001, 47997),
    ("IA", 50001, 52809),
    ("KS", 66002, 67954),
    ("KY", 40003, 42788),
    ("LA", 70001, 71232),
    ("ME", 3901, 4992),
    ("MD", 20812, 21930),
    ("MA", 1001, 2791),
    ("MI", 48001, 49971),
    ("MN", 55001, 56763),
    ("MS", 38601, 39776),
    ("MO", 63001, 65899),
    ("MT", 59001, 59937),
    ("NE", 68001, 68118),
    ("NV", 88901, 89883),
    ("NH", 3031, 3897),
    ("NJ", 7001, 8989),
    ("NM", 87001, 88441),
    ("NY", 10001, 14905),
    ("NC", 27006, 28909),
    ("ND", 58001, 58856),
    ("OH", 43001, 45999),
    ("OK", 73001, 73199),
    ("OR", 97001, 97920),
    ("PA", 15001, 19640),
    ("RI", 2801, 2940),
    ("SC", 29001, 29948),
    ("SD", 57001, 57799),
    ("TN", 37010, 38589),
    ("TX", 75503, 79999),
    ("UT", 84001, 84784),
    ("VT", 5001, 5495),
    ("VA", 22001, 24658),
    ("WA", 98001, 99403),
    ("WV", 24701, 26886),
    ("WI", 53001, 54990),
    ("WY", 82001, 83128),
    // Territories
    ("AS", 96799, 96799),
    ("GU", 96910, 96932),
    ("MP", 96950, 96952),
    ("PR", 600, 799),
    ("VI", 801, 851),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpora_not_empty() {
        assert!(!FEMALE_FIRST_NAMES.is_empty());
        assert!(!MALE_FIRST_NAMES.is_empty());
        assert!(!LAST_NAMES.is_empty());
        assert!(!STREET_SUFFIXES.is_empty());
        assert!(!CITY_PREFIXES.is_empty());
        assert!(!CITY_SUFFIXES.is_empty());
    }

    #[test]
    fn test_zip_ranges_are_well_formed() {
        for (state, low, high) in STATE_ZIP_RANGES {
            assert_eq!(state.len(), 2);
            assert!(low <= high, "inverted range for {}", state);
            assert!(*high <= 99_999, "zip out of range for {}", state);
        }
    }
}
