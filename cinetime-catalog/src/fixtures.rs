//! Built-in catalog for Hyderabad. There is no backend; every listing the
//! service returns comes from here.

use chrono::NaiveDate;

use crate::event::{EventCategory, LiveEvent};
use crate::movie::Movie;
use crate::showtime::Showtime;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn theaters(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: u32,
    title: &str,
    image: &str,
    genre: &str,
    release_date: NaiveDate,
    rating: &str,
    duration: &str,
    language: &str,
    votes: &str,
    description: &str,
    playing_at: &[&str],
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        language: language.to_string(),
        duration: duration.to_string(),
        rating: rating.to_string(),
        release_date,
        votes: votes.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        theaters: theaters(playing_at),
    }
}

pub fn movies() -> Vec<Movie> {
    vec![
        movie(
            1,
            "Spider-Man: No Way Home",
            "https://images.unsplash.com/photo-1635805737707-575885ab0820?w=400&h=600&fit=crop",
            "Action",
            date(2024, 1, 15),
            "8.4",
            "148 min",
            "English",
            "812K",
            "Spider-Man's identity is revealed and he must deal with the consequences.",
            &["PVR Cinemas, Hyderabad", "INOX Movies, Hyderabad", "Prasads IMAX"],
        ),
        movie(
            2,
            "Dune: Part Two",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=600&fit=crop",
            "Sci-Fi",
            date(2024, 2, 1),
            "8.7",
            "166 min",
            "English",
            "541K",
            "Paul Atreides unites with Chani and the Fremen while seeking revenge.",
            &["Prasads IMAX", "AMB Cinemas, Gachibowli"],
        ),
        movie(
            3,
            "Oppenheimer",
            "https://images.unsplash.com/photo-1489599735734-79b4609e24c8?w=400&h=600&fit=crop",
            "Drama",
            date(2024, 1, 21),
            "8.6",
            "180 min",
            "English",
            "698K",
            "The story of J. Robert Oppenheimer and the Manhattan Project.",
            &["PVR Cinemas, Hyderabad", "AMB Cinemas, Gachibowli"],
        ),
        movie(
            4,
            "RRR",
            "https://images.unsplash.com/photo-1489599735734-79b4609e24c8?w=400&h=600&fit=crop",
            "Action",
            date(2024, 1, 10),
            "8.2",
            "187 min",
            "Telugu",
            "1.2M",
            "A fictitious story about two legendary revolutionaries.",
            &["Prasads IMAX", "Sudarshan 35mm", "AMB Cinemas, Gachibowli", "INOX Movies, Hyderabad"],
        ),
        movie(
            5,
            "KGF Chapter 2",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=600&fit=crop",
            "Action",
            date(2024, 1, 5),
            "8.5",
            "168 min",
            "Kannada",
            "956K",
            "Rocky's journey continues as he rises to become the undisputed king.",
            &["INOX Movies, Hyderabad", "Cinepolis, Manjeera Mall"],
        ),
        movie(
            6,
            "Pushpa: The Rule",
            "https://images.unsplash.com/photo-1635805737707-575885ab0820?w=400&h=600&fit=crop",
            "Action",
            date(2024, 2, 14),
            "8.3",
            "175 min",
            "Telugu",
            "734K",
            "Pushpa Raj's story continues in this highly anticipated sequel.",
            &["Sudarshan 35mm", "Prasads IMAX", "Cinepolis, Manjeera Mall"],
        ),
    ]
}

/// The same slate is offered for every movie.
pub fn showtimes() -> Vec<Showtime> {
    vec![
        Showtime::new("10:00 AM", "PVR Cinemas, Hyderabad", 200),
        Showtime::new("01:00 PM", "INOX Movies, Hyderabad", 200),
        Showtime::new("04:00 PM", "Prasads IMAX", 250),
        Showtime::new("07:00 PM", "AMB Cinemas, Gachibowli", 300),
        Showtime::new("10:00 PM", "Cinepolis, Manjeera Mall", 200),
    ]
}

#[allow(clippy::too_many_arguments)]
fn live_event(
    id: u32,
    title: &str,
    image: &str,
    category: EventCategory,
    date: NaiveDate,
    time: &str,
    venue: &str,
    price: &str,
    description: &str,
) -> LiveEvent {
    LiveEvent {
        id,
        title: title.to_string(),
        image: image.to_string(),
        category,
        date,
        time: time.to_string(),
        venue: venue.to_string(),
        price: price.to_string(),
        description: description.to_string(),
    }
}

pub fn live_events() -> Vec<LiveEvent> {
    vec![
        live_event(
            1,
            "IPL 2024: SRH vs MI",
            "https://images.unsplash.com/photo-1540747913346-19e32dc3e97e?w=400&h=300&fit=crop",
            EventCategory::Sports,
            date(2024, 4, 15),
            "19:30",
            "Rajiv Gandhi International Stadium",
            "₹500 onwards",
            "Experience the thrill of IPL cricket as Sunrisers Hyderabad takes on Mumbai Indians.",
        ),
        live_event(
            2,
            "A.R. Rahman Live Concert",
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=300&fit=crop",
            EventCategory::Concert,
            date(2024, 3, 20),
            "18:00",
            "Gachibowli Stadium",
            "₹1500 onwards",
            "Join the maestro A.R. Rahman for an unforgettable musical evening.",
        ),
        live_event(
            3,
            "Stand-up Comedy Night",
            "https://images.unsplash.com/photo-1516307365426-bea591f05011?w=400&h=300&fit=crop",
            EventCategory::Comedy,
            date(2024, 3, 25),
            "20:00",
            "Phoenix Arena",
            "₹800 onwards",
            "Laugh out loud with top comedians performing their best sets.",
        ),
        live_event(
            4,
            "Badminton Premier League",
            "https://images.unsplash.com/photo-1626224583764-f87db24ac4ea?w=400&h=300&fit=crop",
            EventCategory::Sports,
            date(2024, 4, 1),
            "16:00",
            "Kotla Vijaya Bhaskara Reddy Stadium",
            "₹300 onwards",
            "Watch world-class badminton players compete in the premier league.",
        ),
        live_event(
            5,
            "Hyderabad Food Festival",
            "https://images.unsplash.com/photo-1555939594-58d7cb561ad1?w=400&h=300&fit=crop",
            EventCategory::Food,
            date(2024, 3, 30),
            "11:00",
            "HITEC City",
            "₹200 onwards",
            "Explore the diverse culinary heritage of Hyderabad at this grand food festival.",
        ),
        live_event(
            6,
            "Tech Conference 2024",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=400&h=300&fit=crop",
            EventCategory::Conference,
            date(2024, 4, 10),
            "09:00",
            "HICC, Madhapur",
            "₹2000 onwards",
            "Join industry leaders and innovators at the biggest tech conference in the city.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let ids: HashSet<u32> = movies().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), movies().len());

        let event_ids: HashSet<u32> = live_events().iter().map(|e| e.id).collect();
        assert_eq!(event_ids.len(), live_events().len());
    }

    #[test]
    fn test_showtimes_follow_time_slots() {
        let times: Vec<String> = showtimes().into_iter().map(|s| s.time).collect();
        assert_eq!(times, crate::showtime::TIME_SLOTS);
    }
}
