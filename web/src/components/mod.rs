pub mod booking_calendar;
pub mod booking_form;
pub mod loading;

// Re-export commonly used types
pub use booking_calendar::BookingCalendar;
pub use booking_form::BookingForm;
pub use loading::LoadingView;
