//! Catalog value types and the built-in place lists
//!
//! `City` and `Place` are immutable values with no identity beyond field
//! equality. The three lists (hotels, restaurants, destinations) are fixed
//! at load time; every place belongs to exactly one of them.

use serde::{Deserialize, Serialize};

/// A city a place belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// City name
    pub name: String,
    /// Country or region
    pub country: String,
    /// Latitude, as sourced (string form)
    pub latitude: String,
    /// Longitude, as sourced (string form)
    pub longitude: String,
}

impl City {
    /// Create a new city
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Name shown in lists and matched by the destination filter,
    /// e.g. "Madrid, Spain"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// A travel listing: a city plus a short description and an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// The city this listing is for
    pub city: City,
    /// Short listing description ("1286 Restaurants", "Nonstop - 2h 12m+", ...)
    pub description: String,
    /// Image for the listing card
    pub image_url: String,
}

impl Place {
    /// Create a new place
    pub fn new(city: City, description: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            city,
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}

const DEFAULT_IMAGE_WIDTH: &str = "250";

fn image_url(path: &str) -> String {
    format!("https://images.unsplash.com/{path}&w={DEFAULT_IMAGE_WIDTH}")
}

pub(crate) fn madrid() -> City {
    City::new("Madrid", "Spain", "40.416775", "-3.703790")
}

pub(crate) fn naples() -> City {
    City::new("Naples", "Italy", "40.853294", "14.305573")
}

pub(crate) fn dallas() -> City {
    City::new("Dallas", "US", "32.779167", "-96.808891")
}

pub(crate) fn cordoba() -> City {
    City::new("Cordoba", "Argentina", "-31.416668", "-64.183334")
}

pub(crate) fn maldivas() -> City {
    City::new("Maldivas", "South Asia", "1.924992", "73.399658")
}

pub(crate) fn aspen() -> City {
    City::new("Aspen", "Colorado", "39.191097", "-106.817535")
}

pub(crate) fn bali() -> City {
    City::new("Bali", "Indonesia", "-8.3405", "115.0920")
}

pub(crate) fn big_sur() -> City {
    City::new("Big Sur", "California", "36.2704", "-121.8081")
}

pub(crate) fn khumbu_valley() -> City {
    City::new("Khumbu Valley", "Nepal", "27.9320", "86.8050")
}

pub(crate) fn rome() -> City {
    City::new("Rome", "Italy", "41.902782", "12.496366")
}

pub(crate) fn granada() -> City {
    City::new("Granada", "Spain", "37.18817", "-3.60667")
}

pub(crate) fn washington_dc() -> City {
    City::new("Washington DC", "USA", "38.9072", "-77.0369")
}

pub(crate) fn barcelona() -> City {
    City::new("Barcelona", "Spain", "41.390205", "2.154007")
}

pub(crate) fn crete() -> City {
    City::new("Crete", "Greece", "35.2401", "24.8093")
}

pub(crate) fn london() -> City {
    City::new("London", "United Kingdom", "51.509865", "-0.118092")
}

pub(crate) fn paris() -> City {
    City::new("Paris", "France", "48.864716", "2.349014")
}

pub(crate) fn restaurants() -> Vec<Place> {
    vec![
        Place::new(
            naples(),
            "1286 Restaurants",
            image_url("photo-1534308983496-4fabb1a015ee?ixlib=rb-1.2.1&auto=format&fit=crop"),
        ),
        Place::new(
            dallas(),
            "2241 Restaurants",
            image_url("photo-1495749388945-9d6e4e5b67b1?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            cordoba(),
            "876 Restaurants",
            image_url("photo-1562625964-ffe9b2f617fc?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&q=250"),
        ),
        Place::new(
            madrid(),
            "5610 Restaurants",
            image_url("photo-1515443961218-a51367888e4b?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            maldivas(),
            "1286 Restaurants",
            image_url("flagged/photo-1556202256-af2687079e51?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            aspen(),
            "2241 Restaurants",
            image_url("photo-1542384557-0824d90731ee?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            bali(),
            "876 Restaurants",
            image_url("photo-1567337710282-00832b415979?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
    ]
}

pub(crate) fn hotels() -> Vec<Place> {
    vec![
        Place::new(
            maldivas(),
            "1286 Available Properties",
            image_url("photo-1520250497591-112f2f40a3f4?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            aspen(),
            "2241 Available Properties",
            image_url("photo-1445019980597-93fa8acb246c?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            bali(),
            "876 Available Properties",
            image_url("photo-1570213489059-0aac6626cade?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            big_sur(),
            "5610 Available Properties",
            image_url("photo-1561409037-c7be81613c1f?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            naples(),
            "1286 Available Properties",
            image_url("photo-1455587734955-081b22074882?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            dallas(),
            "2241 Available Properties",
            image_url("46/sh3y2u5PSaKq8c4LxB3B_submission-photo-4.jpg?ixlib=rb-1.2.1&auto=format&fit=crop"),
        ),
        Place::new(
            cordoba(),
            "876 Available Properties",
            image_url("photo-1570214476695-19bd467e6f7a?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
    ]
}

pub(crate) fn destinations() -> Vec<Place> {
    vec![
        Place::new(
            khumbu_valley(),
            "Nonstop - 5h 16m+",
            image_url("photo-1544735716-392fe2489ffa?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            madrid(),
            "Nonstop - 2h 12m+",
            image_url("photo-1539037116277-4db20889f2d4?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            bali(),
            "Nonstop - 6h 20m+",
            image_url("photo-1518548419970-58e3b4079ab2?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            rome(),
            "Nonstop - 2h 38m+",
            image_url("photo-1515542622106-78bda8ba0e5b?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            granada(),
            "Nonstop - 2h 12m+",
            image_url("photo-1534423839368-1796a4dd1845?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            maldivas(),
            "Nonstop - 9h 24m+",
            image_url("photo-1544550581-5f7ceaf7f992?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            washington_dc(),
            "Nonstop - 7h 30m+",
            image_url("photo-1557160854-e1e89fdd3286?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            barcelona(),
            "Nonstop - 2h 12m+",
            image_url("photo-1562883676-8c7feb83f09b?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            crete(),
            "Nonstop - 1h 50m+",
            image_url("photo-1486575008575-27670acb58db?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            naples(),
            "Nonstop - 1h 45m+",
            image_url("photo-1534308983496-4fabb1a015ee?ixlib=rb-1.2.1&auto=format&fit=crop"),
        ),
        Place::new(
            dallas(),
            "Nonstop - 8h 30m+",
            image_url("photo-1495749388945-9d6e4e5b67b1?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            cordoba(),
            "1 stop - 11h 30m+",
            image_url("photo-1562625964-ffe9b2f617fc?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&q=250"),
        ),
        Place::new(
            big_sur(),
            "Nonstop - 10h 45m+",
            image_url("photo-1561409037-c7be81613c1f?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop"),
        ),
        Place::new(
            london(),
            "Nonstop - 1h 5m+",
            image_url("photo-1505761671935-60b3a7427bad?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop"),
        ),
        Place::new(
            paris(),
            "Nonstop - 2h 25m+",
            image_url("photo-1509299349698-dd22323b5963?ixlib=rb-1.2.1&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_display_name() {
        assert_eq!(madrid().display_name(), "Madrid, Spain");
        assert_eq!(big_sur().display_name(), "Big Sur, California");
        assert_eq!(london().display_name(), "London, United Kingdom");
    }

    #[test]
    fn test_city_equality_is_field_equality() {
        let a = City::new("Madrid", "Spain", "40.416775", "-3.703790");
        assert_eq!(a, madrid());
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(hotels().len(), 7);
        assert_eq!(restaurants().len(), 7);
        assert_eq!(destinations().len(), 15);
    }

    #[test]
    fn test_destinations_start_with_khumbu_valley() {
        let places = destinations();
        assert_eq!(places[0].city.name, "Khumbu Valley");
        assert_eq!(places[1].city.name, "Madrid");
        assert_eq!(places[14].city.name, "Paris");
    }

    #[test]
    fn test_place_serialization() {
        let place = Place::new(paris(), "Nonstop - 2h 25m+", "https://example.com/paris.jpg");
        let json = serde_json::to_string(&place).unwrap();
        let parsed: Place = serde_json::from_str(&json).unwrap();
        assert_eq!(place, parsed);
    }
}
