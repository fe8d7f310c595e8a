//! Keyword chatbot
//!
//! Answers greetings, questions about a handful of well-known destinations and
//! "where to go in <season>" questions from a fixed table. No state is kept
//! between messages.

use crate::models::chat::Destination;

const GREETINGS: [&str; 3] = ["hello", "hi", "hey"];
const SEASONS: [&str; 3] = ["summer", "monsoon", "winter"];

pub static DESTINATIONS: [Destination; 7] = [
    Destination {
        name: "Goa",
        best_time: "Winter (November to February)",
        speciality: "Beaches, Nightlife, Portuguese Heritage",
        famous_food: "Prawn Balchão, Bebinca",
    },
    Destination {
        name: "Manali",
        best_time: "Summer (April to June), Winter (October to February)",
        speciality: "Snow-capped mountains, Adventure sports, River rafting",
        famous_food: "Siddu, Trout Fish",
    },
    Destination {
        name: "Jaipur",
        best_time: "Winter (November to February)",
        speciality: "Forts, Palaces, Rajasthani Culture",
        famous_food: "Dal Baati Churma, Ghewar",
    },
    Destination {
        name: "Kerala",
        best_time: "Monsoon (June to September), Winter (October to February)",
        speciality: "Backwaters, Ayurvedic treatments, Lush greenery",
        famous_food: "Appam with Stew, Kerala Sadya",
    },
    Destination {
        name: "Leh Ladakh",
        best_time: "Summer (May to September)",
        speciality: "Barren landscapes, Monasteries, High passes",
        famous_food: "Thukpa, Skyu",
    },
    Destination {
        name: "Darjeeling",
        best_time: "Summer (April to June), Autumn (October-November)",
        speciality: "Tea Gardens, Toy Train, Himalayan Views",
        famous_food: "Momos, Darjeeling Tea",
    },
    Destination {
        name: "Andaman Islands",
        best_time: "Winter (October to May)",
        speciality: "Snorkeling, Pristine beaches, Marine life",
        famous_food: "Grilled Lobsters, Coconut Prawn Curry",
    },
];

pub const GREETING_REPLY: &str =
    "👋 Hey traveler! Ask me about any Indian destination, best seasons to visit, or local highlights! 🗺️";

pub const FALLBACK_REPLY: &str = "🤖 Hmm, I didn't get that. Try asking me about a place or season like 'Tell me about Goa' or 'Places to visit in summer'.";

pub fn generate_response(input: &str) -> String {
    let input = input.to_lowercase();

    // Plain substring match, so "this" counts as "hi".
    if GREETINGS.iter().any(|word| input.contains(word)) {
        return GREETING_REPLY.to_string();
    }

    if let Some(destination) = DESTINATIONS
        .iter()
        .find(|d| input.contains(&d.name.to_lowercase()))
    {
        return describe(destination);
    }

    for season in SEASONS {
        if !input.contains(season) {
            continue;
        }
        let matches: Vec<&str> = DESTINATIONS
            .iter()
            .filter(|d| d.best_time.to_lowercase().contains(season))
            .map(|d| d.name)
            .collect();
        if !matches.is_empty() {
            return format!(
                "☀️ **Places to visit in {}**:\n- {}",
                title_case(season),
                matches.join("\n- ")
            );
        }
    }

    FALLBACK_REPLY.to_string()
}

fn describe(destination: &Destination) -> String {
    format!(
        "📍 **{}**  \n🗓️ **Best Time to Visit:** *{}*  \n🌟 **Speciality:** *{}*  \n🍽️ **Famous Food:** *{}*",
        destination.name, destination.best_time, destination.speciality, destination.famous_food
    )
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
