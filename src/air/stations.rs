//! Reference station table
//!
//! Each entry carries a PM2.5 baseline and a scale applied to the year
//! multiplier, so `pm25 = round(base + scale * multiplier)`.

use super::{Measurement, Station};
use crate::geo::Coordinates;

/// A fixed station with its PM2.5 model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSpec {
    pub location: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub base: f64,
    pub scale: f64,
}

impl StationSpec {
    /// PM2.5 for a given multiplier, rounded to a whole µg/m³
    pub fn pm25(&self, multiplier: f64) -> f64 {
        (self.base + self.scale * multiplier).round()
    }

    pub fn to_station(&self, multiplier: f64) -> Station {
        Station {
            location: self.location.to_string(),
            city: Some(self.city.to_string()),
            country: Some(self.country.to_string()),
            coordinates: Coordinates::new(self.latitude, self.longitude),
            measurements: vec![Measurement::pm25(self.pm25(multiplier))],
        }
    }
}

const fn station(
    location: &'static str,
    city: &'static str,
    country: &'static str,
    latitude: f64,
    longitude: f64,
    base: f64,
    scale: f64,
) -> StationSpec {
    StationSpec {
        location,
        city,
        country,
        latitude,
        longitude,
        base,
        scale,
    }
}

/// Build stations for a multiplier
pub fn stations_for(table: &[StationSpec], multiplier: f64) -> Vec<Station> {
    table.iter().map(|s| s.to_station(multiplier)).collect()
}

pub static STATIONS: &[StationSpec] = &[
    // Russia
    station("Москва, центр", "Moscow", "RU", 55.7558, 37.6173, 5.0, 25.0),
    station("Санкт-Петербург", "Saint Petersburg", "RU", 59.9343, 30.3351, 4.0, 20.0),
    station("Новосибирск", "Novosibirsk", "RU", 55.0084, 82.9357, 6.0, 30.0),
    station("Екатеринбург", "Yekaterinburg", "RU", 56.8389, 60.6057, 5.0, 25.0),
    station("Казань", "Kazan", "RU", 55.8304, 49.0661, 4.0, 22.0),
    station("Ростов-на-Дону", "Rostov-on-Don", "RU", 47.2224, 39.7189, 4.0, 24.0),
    station("Владивосток", "Vladivostok", "RU", 43.1155, 131.8855, 6.0, 28.0),
    station("Сочи", "Sochi", "RU", 43.5855, 39.7231, 3.0, 15.0),
    station("Краснодар", "Krasnodar", "RU", 45.0355, 38.9753, 3.0, 20.0),
    station("Волгоград", "Volgograd", "RU", 48.7080, 44.5133, 5.0, 25.0),
    station("Пермь", "Perm", "RU", 58.0105, 56.2502, 5.0, 23.0),
    station("Уфа", "Ufa", "RU", 54.7355, 55.9587, 4.0, 21.0),
    station("Омск", "Omsk", "RU", 54.9885, 73.3242, 5.0, 26.0),
    station("Красноярск", "Krasnoyarsk", "RU", 56.0153, 92.8932, 7.0, 32.0),
    station("Иркутск", "Irkutsk", "RU", 52.2864, 104.2806, 6.0, 29.0),
    station("Хабаровск", "Khabarovsk", "RU", 48.4802, 135.0719, 5.0, 27.0),
    station("Якутск", "Yakutsk", "RU", 62.0274, 129.7315, 8.0, 35.0),
    station("Мурманск", "Murmansk", "RU", 68.9585, 33.0827, 2.0, 12.0),
    station("Калининград", "Kaliningrad", "RU", 54.7104, 20.4522, 3.0, 16.0),
    station("Севастополь", "Sevastopol", "RU", 44.6167, 33.5254, 3.0, 14.0),
    station("Самара", "Samara", "RU", 53.1959, 50.1002, 5.0, 24.0),
    station("Тюмень", "Tyumen", "RU", 57.1522, 65.5272, 4.0, 22.0),
    station("Томск", "Tomsk", "RU", 56.4846, 84.9482, 5.0, 23.0),
    station("Барнаул", "Barnaul", "RU", 53.3552, 83.7699, 6.0, 28.0),
    station("Челябинск", "Chelyabinsk", "RU", 55.1644, 61.4368, 7.0, 30.0),

    // Europe
    station("Berlin Central", "Berlin", "DE", 52.5200, 13.4050, 4.0, 20.0),
    station("Paris Downtown", "Paris", "FR", 48.8566, 2.3522, 5.0, 22.0),
    station("London City", "London", "GB", 51.5074, -0.1278, 6.0, 25.0),
    station("Rome Center", "Rome", "IT", 41.9028, 12.4964, 5.0, 24.0),
    station("Madrid Urban", "Madrid", "ES", 40.4168, -3.7038, 4.0, 22.0),
    station("Amsterdam Central", "Amsterdam", "NL", 52.3676, 4.9041, 3.0, 15.0),
    station("Warsaw Downtown", "Warsaw", "PL", 52.2297, 21.0122, 5.0, 26.0),
    station("Prague City", "Prague", "CZ", 50.0755, 14.4378, 4.0, 20.0),
    station("Vienna Center", "Vienna", "AT", 48.2082, 16.3738, 3.0, 18.0),
    station("Budapest Urban", "Budapest", "HU", 47.4979, 19.0402, 5.0, 23.0),
    station("Brussels Central", "Brussels", "BE", 50.8503, 4.3517, 4.0, 19.0),
    station("Lisbon Downtown", "Lisbon", "PT", 38.7223, -9.1393, 3.0, 16.0),
    station("Athens City", "Athens", "GR", 37.9838, 23.7275, 6.0, 28.0),
    station("Dublin Urban", "Dublin", "IE", 53.3498, -6.2603, 2.0, 14.0),
    station("Stockholm Center", "Stockholm", "SE", 59.3293, 18.0686, 2.0, 12.0),
    station("Oslo Downtown", "Oslo", "NO", 59.9139, 10.7522, 2.0, 13.0),
    station("Helsinki City", "Helsinki", "FI", 60.1699, 24.9384, 2.0, 11.0),
    station("Copenhagen Urban", "Copenhagen", "DK", 55.6761, 12.5683, 3.0, 16.0),
    station("Zurich Center", "Zurich", "CH", 47.3769, 8.5417, 2.0, 14.0),
    station("Luxembourg City", "Luxembourg", "LU", 49.6116, 6.1319, 3.0, 15.0),
    station("Bratislava Downtown", "Bratislava", "SK", 48.1486, 17.1077, 4.0, 21.0),
    station("Ljubljana Urban", "Ljubljana", "SI", 46.0569, 14.5058, 3.0, 18.0),
    station("Tallinn Center", "Tallinn", "EE", 59.4370, 24.7536, 3.0, 17.0),
    station("Riga Downtown", "Riga", "LV", 56.9496, 24.1052, 4.0, 20.0),
    station("Vilnius City", "Vilnius", "LT", 54.6872, 25.2797, 4.0, 19.0),

    // Asia
    station("Tokyo Central", "Tokyo", "JP", 35.6762, 139.6503, 4.0, 20.0),
    station("Seoul Downtown", "Seoul", "KR", 37.5665, 126.9780, 6.0, 30.0),
    station("Beijing Urban", "Beijing", "CN", 39.9042, 116.4074, 10.0, 60.0),
    station("Shanghai Center", "Shanghai", "CN", 31.2304, 121.4737, 8.0, 50.0),
    station("Hong Kong Central", "Hong Kong", "HK", 22.3193, 114.1694, 5.0, 35.0),
    station("Singapore City", "Singapore", "SG", 1.3521, 103.8198, 3.0, 18.0),
    station("Bangkok Downtown", "Bangkok", "TH", 13.7563, 100.5018, 7.0, 38.0),
    station("Kuala Lumpur", "Kuala Lumpur", "MY", 3.1390, 101.6869, 6.0, 34.0),
    station("Manila Urban", "Manila", "PH", 14.5995, 120.9842, 8.0, 42.0),
    station("Jakarta Center", "Jakarta", "ID", -6.2088, 106.8456, 9.0, 48.0),
    station("Delhi Downtown", "Delhi", "IN", 28.6139, 77.2090, 12.0, 75.0),
    station("Mumbai Urban", "Mumbai", "IN", 19.0760, 72.8777, 10.0, 65.0),
    station("Bangalore City", "Bangalore", "IN", 12.9716, 77.5946, 8.0, 45.0),
    station("Karachi Center", "Karachi", "PK", 24.8607, 67.0011, 11.0, 68.0),
    station("Dhaka Urban", "Dhaka", "BD", 23.8103, 90.4125, 13.0, 80.0),
    station("Colombo Downtown", "Colombo", "LK", 6.9271, 79.8612, 6.0, 36.0),
    station("Kathmandu City", "Kathmandu", "NP", 27.7172, 85.3240, 9.0, 52.0),
    station("Ulaanbaatar", "Ulaanbaatar", "MN", 47.8864, 106.9057, 14.0, 85.0),
    station("Almaty Urban", "Almaty", "KZ", 43.2220, 76.8512, 5.0, 32.0),
    station("Tashkent Center", "Tashkent", "UZ", 41.2995, 69.2401, 6.0, 35.0),
    station("Baku Downtown", "Baku", "AZ", 40.4093, 49.8671, 7.0, 40.0),
    station("Yerevan City", "Yerevan", "AM", 40.1792, 44.4991, 6.0, 33.0),
    station("Tbilisi Urban", "Tbilisi", "GE", 41.7151, 44.8271, 5.0, 30.0),
    station("Tehran Center", "Tehran", "IR", 35.6892, 51.3890, 10.0, 65.0),
    station("Dubai Downtown", "Dubai", "AE", 25.2048, 55.2708, 7.0, 42.0),

    // North America
    station("New York Downtown", "New York", "US", 40.7128, -74.0060, 3.0, 15.0),
    station("Los Angeles Urban", "Los Angeles", "US", 34.0522, -118.2437, 4.0, 20.0),
    station("Chicago Center", "Chicago", "US", 41.8781, -87.6298, 3.0, 16.0),
    station("Toronto Downtown", "Toronto", "CA", 43.6532, -79.3832, 2.0, 12.0),
    station("Vancouver City", "Vancouver", "CA", 49.2827, -123.1207, 2.0, 10.0),
    station("Mexico City Urban", "Mexico City", "MX", 19.4326, -99.1332, 8.0, 45.0),
    station("Miami Beach", "Miami", "US", 25.7617, -80.1918, 2.0, 11.0),
    station("Seattle Downtown", "Seattle", "US", 47.6062, -122.3321, 2.0, 13.0),
    station("Boston Center", "Boston", "US", 42.3601, -71.0589, 3.0, 14.0),
    station("San Francisco", "San Francisco", "US", 37.7749, -122.4194, 2.0, 12.0),
    station("Washington DC", "Washington", "US", 38.9072, -77.0369, 3.0, 14.0),
    station("Atlanta Urban", "Atlanta", "US", 33.7490, -84.3880, 3.0, 17.0),
    station("Denver Downtown", "Denver", "US", 39.7392, -104.9903, 3.0, 16.0),
    station("Montreal City", "Montreal", "CA", 45.5017, -73.5673, 2.0, 13.0),
    station("Calgary Urban", "Calgary", "CA", 51.0447, -114.0719, 2.0, 11.0),

    // South America
    station("Sao Paulo Urban", "Sao Paulo", "BR", -23.5505, -46.6333, 5.0, 30.0),
    station("Rio de Janeiro", "Rio de Janeiro", "BR", -22.9068, -43.1729, 4.0, 28.0),
    station("Buenos Aires", "Buenos Aires", "AR", -34.6037, -58.3816, 4.0, 22.0),
    station("Lima Downtown", "Lima", "PE", -12.0464, -77.0428, 6.0, 35.0),
    station("Bogota Urban", "Bogota", "CO", 4.7110, -74.0721, 5.0, 32.0),

    // Africa
    station("Cairo Center", "Cairo", "EG", 30.0444, 31.2357, 8.0, 60.0),
    station("Lagos Urban", "Lagos", "NG", 6.5244, 3.3792, 7.0, 55.0),
    station("Johannesburg", "Johannesburg", "ZA", -26.2041, 28.0473, 6.0, 40.0),
    station("Nairobi Downtown", "Nairobi", "KE", -1.2921, 36.8219, 5.0, 45.0),
    station("Casablanca Urban", "Casablanca", "MA", 33.5731, -7.5898, 4.0, 35.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(STATIONS.len(), 100);
    }

    #[test]
    fn test_table_coordinates_valid() {
        for s in STATIONS {
            assert!(
                Coordinates::new(s.latitude, s.longitude).is_valid(),
                "{} out of range",
                s.location
            );
            assert!(s.base >= 0.0 && s.scale >= 0.0);
        }
    }

    #[test]
    fn test_pm25_rounding() {
        let beijing = STATIONS.iter().find(|s| s.city == "Beijing").unwrap();
        // 10 + 60 * 0.75 = 55
        assert_eq!(beijing.pm25(0.75), 55.0);
        // 10 + 60 * 0.3 = 28
        assert_eq!(beijing.pm25(0.3), 28.0);

        let dublin = STATIONS.iter().find(|s| s.city == "Dublin").unwrap();
        // 2 + 14 * 0.75 = 12.5 rounds away from zero
        assert_eq!(dublin.pm25(0.75), 13.0);
    }

    #[test]
    fn test_to_station() {
        let stations = stations_for(&STATIONS[..2], 0.8);
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].city.as_deref(), Some("Moscow"));
        assert_eq!(stations[0].country.as_deref(), Some("RU"));
        // 5 + 25 * 0.8 = 25
        assert_eq!(stations[0].pm25(), Some(25.0));
    }
}
