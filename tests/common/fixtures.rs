use serde_json::{Value, json};

/// A record with every section filled in.
pub fn full_record() -> Value {
    json!({
        "date": "2024-03-05 (Tue)",
        "moon_phase_sign": "Waxing Crescent in Aries",
        "day_planet": "Mars",
        "horoscope": {
            "transit_summary": ["Mars sextile Venus", "Moon enters Taurus at noon"],
            "upcoming_events": [
                { "when": "Fri", "text": "Full Moon in Virgo" }
            ],
            "focus_of_day": {
                "dos": ["Start the garden plan"],
                "donts": ["Overbook the evening"],
                "opportunities": [],
                "warnings": ["Impulsive purchases"]
            },
            "task_list": ["Email the landlord", "Refill the bird feeder"],
            "creative_flow": {
                "project": "Tarot zine",
                "mode": "Sketching",
                "time_box": "45 min",
                "bonus": "Try watercolor"
            }
        },
        "rituals": {
            "checklist": {
                "candle": "Red",
                "oil": "Cinnamon",
                "crystal": "Carnelian",
                "herb_incense": "Basil",
                "extras": ["Bay leaf"]
            },
            "casting": {
                "window_start": "7:00",
                "window_end": "7:30",
                "intent": "Courage for the week",
                "why": "Mars day"
            },
            "releasing": {
                "window_start": "21:00",
                "window_end": "21:20",
                "intent": "Let go of old clutter"
            },
            "notes": "Swap basil for rosemary if needed"
        },
        "chores": {
            "energy_of_day": "Brisk and focused",
            "to_do": {
                "indoor_large": "Deep clean the oven",
                "indoor_small": "Wipe the windowsills",
                "outdoor": "Sweep the porch",
                "plants": "Repot the pothos"
            },
            "laundry_focus": "Bedding",
            "avoid": ["Reorganizing the attic"],
            "shopping_check": "Candles and salt"
        },
        "kitchen": {
            "tea_of_day": "Ginger",
            "breakfast": "Oats with cinnamon",
            "lunch": "Lentil soup",
            "dinner": "Roast peppers",
            "snack_prep": "Spiced nuts",
            "notes": "Cook extra soup"
        },
        "evening_reflection": {
            "prompt1": "Where did I act bravely today?",
            "prompt2": ""
        }
    })
}

/// Only the required field.
pub fn minimal_record() -> Value {
    json!({ "date": "2024-03-05 (Tue)" })
}

/// A record whose transit list would fail validation; used with the
/// validation step bypassed.
pub fn record_with_malformed_transit() -> Value {
    json!({
        "date": "2024-03-05",
        "horoscope": {
            "transit_summary": ["Sun conjunct Mercury", 42]
        }
    })
}
