use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,

    // Kept exactly as typed. Two spellings of the same day are two entries.
    pub date: String,

    pub km: f64,
}

impl Workout {
    pub fn new(date: String, km: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            km,
        }
    }

    /// Distance with one decimal place, as shown in tables.
    pub fn km_display(&self) -> String {
        format!("{:.1}", self.km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Workout::new("20.07.19".to_string(), 5.7);
        let b = Workout::new("20.07.19".to_string(), 5.7);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_km_display_rounds_to_one_decimal() {
        let w = Workout::new("20.07.19".to_string(), 8.0);
        assert_eq!(w.km_display(), "8.0");

        let w = Workout::new("20.07.19".to_string(), 3.44);
        assert_eq!(w.km_display(), "3.4");
    }
}
