use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The fixed appointment times offered for every bookable date.
pub const AVAILABLE_HOURS: [&str; 4] = ["09:00", "11:30", "14:00", "16:30"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogSize {
    Small,
    Large,
}

impl DogSize {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "small" => Some(DogSize::Small),
            "large" => Some(DogSize::Large),
            _ => None,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            DogSize::Small => "small",
            DogSize::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DogSize::Small => "Mały (do 10kg)",
            DogSize::Large => "Duży (powyżej 10kg)",
        }
    }
}

/// Everything the visitor has typed or picked so far. One draft per page
/// visit; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub dog_name: String,
    pub dog_size: Option<DogSize>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl BookingDraft {
    /// A time slot only makes sense for the date it was picked under, so
    /// changing the date always drops the slot.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.time = None;
    }

    /// The submit button is enabled exactly when this holds. `message` is
    /// never required.
    pub fn is_complete(&self) -> bool {
        !self.dog_name.trim().is_empty()
            && self.dog_size.is_some()
            && self.date.is_some()
            && self
                .time
                .as_deref()
                .is_some_and(|t| AVAILABLE_HOURS.contains(&t))
            && !self.phone.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    /// Returns `None` for incomplete drafts, which is what makes a
    /// programmatic submit on an invalid form a no-op.
    pub fn to_payload(&self) -> Option<BookingPayload> {
        if !self.is_complete() {
            return None;
        }

        Some(BookingPayload {
            dog_name: self.dog_name.clone(),
            dog_size: self.dog_size?,
            date: self.date?.format("%Y-%m-%d").to_string(),
            time: self.time.clone()?,
            phone: self.phone.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

/// The JSON body posted to the webhook. Field names are fixed by the
/// receiving automation, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub dog_name: String,
    pub dog_size: DogSize,
    pub date: String,
    pub time: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Where one visit's submission stands. Monotonic: Idle → Submitting →
/// Submitted, and Submitted is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionPhase {
    pub fn can_submit(self) -> bool {
        self == SubmissionPhase::Idle
    }

    pub fn is_submitting(self) -> bool {
        self == SubmissionPhase::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == SubmissionPhase::Submitted
    }
}

/// Date selection policy for the calendar: nothing before today, and the
/// salon is closed on Sundays.
pub fn is_bookable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date.weekday() != Weekday::Sun
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn complete_draft() -> BookingDraft {
        BookingDraft {
            dog_name: "Burek".to_string(),
            dog_size: Some(DogSize::Small),
            date: NaiveDate::from_ymd_opt(2026, 3, 10),
            time: Some("11:30".to_string()),
            phone: "+48600000000".to_string(),
            email: "a@b.com".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn complete_draft_is_complete() {
        assert!(complete_draft().is_complete());
    }

    #[test]
    fn blank_dog_name_is_incomplete() {
        let mut draft = complete_draft();
        draft.dog_name = "   ".to_string();
        assert!(!draft.is_complete());
    }

    #[test]
    fn unset_dog_size_is_incomplete() {
        let mut draft = complete_draft();
        draft.dog_size = None;
        assert!(!draft.is_complete());
        assert_eq!(draft.to_payload(), None);
    }

    #[test]
    fn unset_date_is_incomplete() {
        let mut draft = complete_draft();
        draft.date = None;
        assert!(!draft.is_complete());
    }

    #[test]
    fn unset_time_is_incomplete() {
        let mut draft = complete_draft();
        draft.time = None;
        assert!(!draft.is_complete());
    }

    #[test]
    fn unknown_time_slot_is_incomplete() {
        let mut draft = complete_draft();
        draft.time = Some("10:15".to_string());
        assert!(!draft.is_complete());
    }

    #[test]
    fn blank_phone_is_incomplete() {
        let mut draft = complete_draft();
        draft.phone = String::new();
        assert!(!draft.is_complete());
    }

    #[test]
    fn blank_email_is_incomplete() {
        let mut draft = complete_draft();
        draft.email = String::new();
        assert!(!draft.is_complete());
    }

    #[test]
    fn empty_message_is_still_complete() {
        let mut draft = complete_draft();
        draft.message = String::new();
        assert!(draft.is_complete());
    }

    #[test]
    fn selecting_a_new_date_clears_the_time() {
        let mut draft = complete_draft();
        draft.select_date(NaiveDate::from_ymd_opt(2026, 3, 12).unwrap());
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 3, 12));
        assert_eq!(draft.time, None);
    }

    #[test]
    fn payload_matches_webhook_contract() {
        let payload = complete_draft().to_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "dogName": "Burek",
                "dogSize": "small",
                "date": "2026-03-10",
                "time": "11:30",
                "phone": "+48600000000",
                "email": "a@b.com",
                "message": ""
            })
        );
    }

    #[test]
    fn dog_size_round_trips_through_its_form_value() {
        assert_eq!(DogSize::from_value("small"), Some(DogSize::Small));
        assert_eq!(DogSize::from_value("large"), Some(DogSize::Large));
        assert_eq!(DogSize::from_value(""), None);
        assert_eq!(DogSize::from_value("medium"), None);
        assert_eq!(DogSize::Large.value(), "large");
    }

    #[test]
    fn past_dates_are_not_bookable() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert!(!is_bookable_date(yesterday, today));
        assert!(is_bookable_date(today, today));
        assert!(is_bookable_date(today.succ_opt().unwrap(), today));
    }

    #[test]
    fn sundays_are_not_bookable() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        // 2026-03-15 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert!(!is_bookable_date(sunday, today));
        assert!(is_bookable_date(sunday.succ_opt().unwrap(), today));
    }

    #[test]
    fn submission_phase_only_accepts_submit_when_idle() {
        assert!(SubmissionPhase::Idle.can_submit());
        assert!(!SubmissionPhase::Submitting.can_submit());
        assert!(!SubmissionPhase::Submitted.can_submit());
    }

    #[test]
    fn submission_phase_starts_idle() {
        let phase = SubmissionPhase::default();
        assert_eq!(phase, SubmissionPhase::Idle);
        assert!(!phase.is_submitting());
        assert!(!phase.is_submitted());
    }
}
