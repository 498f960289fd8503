//! Mock dashboard content: the week forecast, past trips and nearby attractions

use std::ops::RangeInclusive;

use rand::Rng;

/// Weather type of a forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherType {
    Cloudy,
    Rainy,
    Stormy,
    Sunny,
}

impl WeatherType {
    /// Icon name for this weather type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Cloudy => "clouds",
            Self::Rainy => "cloud-drizzle",
            Self::Stormy => "cloud-bolt",
            Self::Sunny => "sun",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Stormy => "Stormy",
            Self::Sunny => "Sunny",
        }
    }

    /// Best-effort mapping from a provider condition such as "Clouds" or "Rain"
    pub fn from_condition(condition: &str) -> Option<Self> {
        match condition.to_lowercase().as_str() {
            "clear" => Some(Self::Sunny),
            "clouds" | "mist" | "fog" | "haze" => Some(Self::Cloudy),
            "rain" | "drizzle" | "snow" => Some(Self::Rainy),
            "thunderstorm" | "squall" | "tornado" => Some(Self::Stormy),
            _ => None,
        }
    }
}

/// One day of the week forecast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastDay {
    pub id: u32,
    pub name: &'static str,
    pub temperature: i32,
    pub weather: WeatherType,
}

/// Fixed shape of a forecast day; the temperature is sampled from `range`
#[derive(Debug, Clone)]
pub struct DayTemplate {
    pub id: u32,
    pub name: &'static str,
    pub weather: WeatherType,
    pub range: RangeInclusive<i32>,
}

/// The fixed week the forecast is generated from
pub fn week_templates() -> [DayTemplate; 7] {
    use WeatherType::*;

    [
        DayTemplate { id: 1, name: "Mon", weather: Sunny, range: 10..=20 },
        DayTemplate { id: 2, name: "Tues", weather: Sunny, range: 10..=20 },
        DayTemplate { id: 3, name: "Wed", weather: Cloudy, range: 20..=30 },
        DayTemplate { id: 4, name: "Thurs", weather: Rainy, range: 0..=10 },
        DayTemplate { id: 5, name: "Fri", weather: Stormy, range: 10..=20 },
        DayTemplate { id: 6, name: "Sat", weather: Sunny, range: 20..=30 },
        DayTemplate { id: 7, name: "Sun", weather: Cloudy, range: 0..=10 },
    ]
}

impl DayTemplate {
    /// Sample a forecast day with a uniformly drawn temperature
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ForecastDay {
        ForecastDay {
            id: self.id,
            name: self.name,
            temperature: rng.gen_range(self.range.clone()),
            weather: self.weather,
        }
    }
}

/// Generate a fresh week forecast
pub fn weekly_forecast<R: Rng + ?Sized>(rng: &mut R) -> Vec<ForecastDay> {
    week_templates().iter().map(|day| day.sample(rng)).collect()
}

/// A trip taken before
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

/// A point of interest near the car
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attraction {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub icon: &'static str,
}

const PAST_TRIPS: &[Trip] = &[
    Trip {
        id: 1,
        title: "Sydney Opera House -> UNSW",
        description: "Tuesday, 8:00 pm.",
        image_url: "",
    },
    Trip { id: 2, title: "George St -> Maroubra", description: "Wednesday, 9:00pm", image_url: "" },
    Trip {
        id: 3,
        title: "Mascot -> Sydney Intl Airport",
        description: "Sunday, 12:00pm",
        image_url: "",
    },
    Trip { id: 4, title: "Coogee -> Bondi Beach", description: "Friday, 6:00am", image_url: "" },
];

const ATTRACTIONS: &[Attraction] = &[
    Attraction {
        id: 1,
        title: "Sydney Opera House",
        description: "The Sydney Opera House is an iconic architectural masterpiece located in \
                      Sydney, Australia, renowned for its distinctive sail-like design and \
                      hosting world-class performing arts events.",
        image_url: "https://media.architecturaldigest.com/photos/63d82d299dd44a3242d15ade/3:2/w_3000,h_2000,c_limit/GettyImages-982774858.jpg",
        icon: "galaxy",
    },
    Attraction {
        id: 2,
        title: "Bondi Beach",
        description: "World-famous coastal paradise nestled in Sydney, Australia, celebrated for \
                      its golden sands, vibrant surf culture, and breathtaking ocean views.",
        image_url: "https://www.sydney.com/sites/sydney/files/styles/landscape_992x558/public/2022-04/164098-56.jpg",
        icon: "hat-wizard",
    },
    Attraction {
        id: 3,
        title: "Darling Harbour",
        description: "Bustling waterfront precinct in Sydney, Australia, offering a vibrant blend \
                      of entertainment, dining, shopping, and stunning harbor views, making it a \
                      popular destination for locals and tourists alike.",
        image_url: "https://www.darlingharbour.com/getmedia/f178f096-38af-4a70-bedc-94c1c5a5da26/darling-harbour-unhcrfireworks-2022-credit-henry-li-1_1.jpg",
        icon: "broom-ball",
    },
    Attraction {
        id: 4,
        title: "Sydney Tower Eye",
        description: "Prominent observation deck situated atop Sydney Tower, offering \
                      breathtaking 360-degree views of the city skyline.",
        image_url: "https://www.sydneytowereye.com.au/media/iauj4dnh/thumbnail_ste-rediscover-frontpagehero-1920x1080px.jpeg",
        icon: "starship-freighter",
    },
];

/// Past trips shown in the history section
pub fn past_trips() -> &'static [Trip] {
    PAST_TRIPS
}

/// Attractions shown in the "popular spots" section
pub fn attractions() -> &'static [Attraction] {
    ATTRACTIONS
}
