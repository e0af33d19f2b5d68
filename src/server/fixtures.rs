//! Seed data for the demo API
//!
//! Two superhero teams of six, a deterministic activity log per member, a
//! leaderboard ranked by total calories, and a workout catalogue.

use crate::models::{Activity, LeaderboardEntry, RecordId, Team, User, Workout};
use chrono::{DateTime, Duration, TimeZone, Utc};

const MARVEL: &str = "Team Marvel";
const DC: &str = "Team DC";

const HEROES: [(&str, &str, &str, &str); 12] = [
    ("Tony Stark", "iron.man@marvel.com", MARVEL, "Strength Training"),
    ("Steve Rogers", "captain.america@marvel.com", MARVEL, "Cardio"),
    ("Natasha Romanoff", "black.widow@marvel.com", MARVEL, "Flexibility"),
    ("Bruce Banner", "hulk@marvel.com", MARVEL, "Strength Training"),
    ("Thor Odinson", "thor@marvel.com", MARVEL, "Strength Training"),
    ("Peter Parker", "spider.man@marvel.com", MARVEL, "Cardio"),
    ("Bruce Wayne", "batman@dc.com", DC, "Strength Training"),
    ("Clark Kent", "superman@dc.com", DC, "Strength Training"),
    ("Diana Prince", "wonder.woman@dc.com", DC, "Strength Training"),
    ("Barry Allen", "flash@dc.com", DC, "Cardio"),
    ("Arthur Curry", "aquaman@dc.com", DC, "Swimming"),
    ("Hal Jordan", "green.lantern@dc.com", DC, "Cardio"),
];

const ACTIVITY_TYPES: [&str; 7] = [
    "Running",
    "Cycling",
    "Swimming",
    "Weightlifting",
    "Yoga",
    "Boxing",
    "CrossFit",
];

const WORKOUTS: [(&str, &[&str]); 4] = [
    (
        "Strength Training",
        &["Bench Press", "Squats", "Deadlifts", "Pull-ups", "Dumbbell Rows"],
    ),
    (
        "Cardio",
        &["Interval Sprints", "Long Distance Run", "Cycling", "Jump Rope", "Burpees"],
    ),
    (
        "Flexibility",
        &["Yoga Flow", "Stretching Routine", "Pilates", "Foam Rolling"],
    ),
    (
        "Swimming",
        &["Freestyle Laps", "Butterfly Stroke", "Backstroke", "Water Aerobics"],
    ),
];

const DIFFICULTIES: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Full demo dataset
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub activities: Vec<Activity>,
    pub workouts: Vec<Workout>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Fixtures {
    /// Build the dataset; identical on every call
    pub fn seeded() -> Self {
        let users = seed_users();
        let teams = seed_teams();
        let activities = seed_activities(&users);
        let leaderboard = rank_leaderboard(&users, &activities);
        let workouts = seed_workouts();

        Self {
            users,
            teams,
            activities,
            workouts,
            leaderboard,
        }
    }
}

fn seed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_users() -> Vec<User> {
    HEROES
        .iter()
        .zip(1..)
        .map(|(&(name, email, team, role), id)| User {
            id: RecordId::Int(id),
            name: name.to_string(),
            email: email.to_string(),
            team: Some(team.to_string()),
            role: Some(role.to_string()),
        })
        .collect()
}

fn seed_teams() -> Vec<Team> {
    [(MARVEL, "Earth's Mightiest Heroes"), (DC, "Justice League")]
        .iter()
        .zip(1..)
        .map(|(&(name, description), id)| Team {
            id: RecordId::Int(id),
            name: name.to_string(),
            description: description.to_string(),
            members: HEROES
                .iter()
                .filter(|hero| hero.2 == name)
                .map(|hero| hero.1.to_string())
                .collect(),
            created_at: seed_time().to_rfc3339(),
            member_count: None,
        })
        .collect()
}

fn seed_activities(users: &[User]) -> Vec<Activity> {
    let mut activities = Vec::new();
    let mut id = 1;

    for (u, user) in users.iter().enumerate() {
        // 5 to 9 sessions per user
        let sessions = 5 + (u * 3) % 5;
        for s in 0..sessions {
            let mix = u * 7 + s * 13;
            let duration = 20 + (mix * 11) % 101;
            activities.push(Activity {
                id: RecordId::Int(id),
                user: user.name.clone(),
                activity_type: ACTIVITY_TYPES[mix % ACTIVITY_TYPES.len()].to_string(),
                duration: duration as f64,
                distance: 1.0 + ((mix * 37) % 1900) as f64 / 100.0,
                calories: (100 + (mix * 53) % 701) as f64,
                date: (seed_time() - Duration::days(((mix * 5) % 31) as i64)).to_rfc3339(),
            });
            id += 1;
        }
    }

    activities
}

fn rank_leaderboard(users: &[User], activities: &[Activity]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .map(|user| {
            let own: Vec<&Activity> = activities.iter().filter(|a| a.user == user.name).collect();
            let distance: f64 = own.iter().map(|a| a.distance).sum();
            LeaderboardEntry {
                id: user.id.clone(),
                rank: 0,
                user_name: user.name.clone(),
                user_email: user.email.clone(),
                team: user.team.clone(),
                total_calories: Some(own.iter().map(|a| a.calories as u64).sum()),
                total_activities: Some(own.len() as u64),
                total_distance_km: Some((distance * 100.0).round() / 100.0),
                total_duration_minutes: Some(own.iter().map(|a| a.duration as u64).sum()),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_calories.cmp(&a.total_calories));
    for (entry, rank) in entries.iter_mut().zip(1..) {
        entry.rank = rank;
    }
    entries
}

fn seed_workouts() -> Vec<Workout> {
    WORKOUTS
        .iter()
        .flat_map(|&(category, exercises)| exercises.iter().map(move |&name| (category, name)))
        .zip(1..)
        .map(|((category, name), id)| {
            let i = id as usize;
            let duration = 30 + (i * 17) % 61;
            let calories_per_hour = 200 + (i * 41) % 401;
            Workout {
                id: RecordId::Int(id),
                name: name.to_string(),
                description: format!("A challenging {} workout routine", name.to_lowercase()),
                category: category.to_string(),
                duration: duration as f64,
                difficulty: DIFFICULTIES[i % DIFFICULTIES.len()].to_string(),
                calories_burned: Some((calories_per_hour * duration / 60) as f64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        let fixtures = Fixtures::seeded();
        assert_eq!(fixtures.users.len(), 12);
        assert_eq!(fixtures.teams.len(), 2);
        assert_eq!(fixtures.workouts.len(), 18);
        assert_eq!(fixtures.leaderboard.len(), 12);
        assert!(fixtures.teams.iter().all(|t| t.members.len() == 6));
    }

    #[test]
    fn test_leaderboard_ranked_by_calories() {
        let board = Fixtures::seeded().leaderboard;

        for (pair, expected_rank) in board.windows(2).zip(1..) {
            assert_eq!(pair[0].rank, expected_rank);
            assert!(pair[0].total_calories >= pair[1].total_calories);
        }
    }

    #[test]
    fn test_leaderboard_totals_match_activities() {
        let fixtures = Fixtures::seeded();
        let total: u64 = fixtures
            .leaderboard
            .iter()
            .filter_map(|e| e.total_activities)
            .sum();
        assert_eq!(total as usize, fixtures.activities.len());
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(Fixtures::seeded().activities, Fixtures::seeded().activities);
    }
}
