// Built-in sample weeks used to bootstrap an empty collection.

use crate::modules::weekly_metrics::core::record::WEEK_START_DATE_FIELD;
use serde_json::{Map, Value, json};

struct SampleWeek {
    week_start_date: &'static str,
    new_leads: u64,
    emails_delivered: u64,
    emails_opened: u64,
    emails_replied: u64,
    profile_visits: u64,
    connection_requests: u64,
    likes: u64,
    messages_sent: u64,
    calls_dialed: u64,
    calls_connected: u64,
    meetings_booked: u64,
}

macro_rules! sample_week {
    ($date:literal: $leads:literal, $delivered:literal, $opened:literal, $replied:literal, $visits:literal, $requests:literal, $likes:literal, $messages:literal, $dialed:literal, $connected:literal, $meetings:literal) => {
        SampleWeek {
            week_start_date: $date,
            new_leads: $leads,
            emails_delivered: $delivered,
            emails_opened: $opened,
            emails_replied: $replied,
            profile_visits: $visits,
            connection_requests: $requests,
            likes: $likes,
            messages_sent: $messages,
            calls_dialed: $dialed,
            calls_connected: $connected,
            meetings_booked: $meetings,
        }
    };
}

const SAMPLE_WEEKS: [SampleWeek; 9] = [
    sample_week!("2025-06-09": 70, 115, 28, 0, 55, 60, 12, 3, 2, 0, 1),
    sample_week!("2025-06-16": 75, 120, 30, 1, 60, 65, 15, 4, 5, 1, 0),
    sample_week!("2025-06-23": 80, 133, 43, 0, 79, 70, 17, 5, 3, 0, 0),
    sample_week!("2025-06-30": 81, 190, 38, 0, 85, 80, 32, 11, 0, 0, 0),
    sample_week!("2025-07-07": 106, 251, 40, 0, 107, 96, 61, 41, 0, 0, 0),
    sample_week!("2025-07-14": 49, 201, 36, 0, 73, 60, 32, 17, 0, 0, 0),
    sample_week!("2025-07-21": 91, 187, 37, 0, 92, 80, 29, 10, 0, 0, 0),
    sample_week!("2025-07-28": 253, 244, 44, 0, 95, 65, 47, 10, 563, 30, 3),
    sample_week!("2025-08-04": 298, 361, 123, 0, 205, 100, 47, 22, 387, 28, 4),
];

/// Sample documents as `(key, data)` pairs, ready to be written to the store.
pub fn sample_week_documents() -> Vec<(String, Map<String, Value>)> {
    SAMPLE_WEEKS
        .iter()
        .map(|week| {
            let mut data = Map::new();
            data.insert(WEEK_START_DATE_FIELD.to_string(), json!(week.week_start_date));
            data.insert("newLeads".to_string(), json!(week.new_leads));
            data.insert("emailsDelivered".to_string(), json!(week.emails_delivered));
            data.insert("emailsOpened".to_string(), json!(week.emails_opened));
            data.insert("emailsReplied".to_string(), json!(week.emails_replied));
            data.insert("profileVisits".to_string(), json!(week.profile_visits));
            data.insert(
                "connectionRequests".to_string(),
                json!(week.connection_requests),
            );
            data.insert("likes".to_string(), json!(week.likes));
            data.insert("messagesSent".to_string(), json!(week.messages_sent));
            data.insert("callsDialed".to_string(), json!(week.calls_dialed));
            data.insert("callsConnected".to_string(), json!(week.calls_connected));
            data.insert("meetingsBooked".to_string(), json!(week.meetings_booked));
            (week.week_start_date.to_string(), data)
        })
        .collect()
}
