//! Batch generator for users and weight-log entries.

use crate::generators::{date, numeric, person, uuid};
use chrono::{Months, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{MockData, User, WeightEntry};

/// How far back an account creation date may fall.
const SIGNUP_WINDOW_MONTHS: u32 = 60;

/// Age bounds for generated dates of birth.
const MIN_AGE_YEARS: u32 = 18;
const MAX_AGE_YEARS: u32 = 90;

/// Data generator producing deterministic seed batches.
///
/// The generator holds a seeded random number generator so runs with the
/// same seed produce identical batches.
pub struct DataGenerator {
    rng: StdRng,
    seed: u64,
}

impl DataGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a batch of `num_users` users with `weights_per_user`
    /// weight-log entries each.
    ///
    /// Each entry's log date falls between its owning user's creation date
    /// and today, and carries the user's position in the batch as its
    /// back-reference. Either count may be zero, yielding empty lists.
    pub fn generate(&mut self, num_users: u64, weights_per_user: u64) -> MockData {
        let today = Utc::now().date_naive();

        let users: Vec<User> = (0..num_users).map(|_| self.next_user(today)).collect();

        let mut weights = Vec::with_capacity((num_users * weights_per_user) as usize);
        for (user_index, user) in users.iter().enumerate() {
            for _ in 0..weights_per_user {
                weights.push(WeightEntry {
                    log_date: date::date_between(&mut self.rng, user.creation_date, today),
                    value: numeric::weight_kg(&mut self.rng),
                    user_index,
                });
            }
        }

        MockData { users, weights }
    }

    fn next_user(&mut self, today: NaiveDate) -> User {
        let first_name = person::first_name(&mut self.rng);
        let last_name = person::last_name(&mut self.rng);
        let email = person::email(&mut self.rng, first_name, last_name);
        let phone = person::phone(&mut self.rng);

        let signup_start = today
            .checked_sub_months(Months::new(SIGNUP_WINDOW_MONTHS))
            .unwrap_or(today);
        let dob_start = today
            .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
            .unwrap_or(today);
        let dob_end = today
            .checked_sub_months(Months::new(MIN_AGE_YEARS * 12))
            .unwrap_or(today);

        User {
            user_uid: uuid::generate_uuid_v4(&mut self.rng),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            creation_date: date::date_between(&mut self.rng, signup_start, today),
            dob: date::date_between(&mut self.rng, dob_start, dob_end),
            email,
            phone,
            start_weight: numeric::weight_kg(&mut self.rng),
        }
    }
}
