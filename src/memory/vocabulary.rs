//! Fixed extraction vocabulary.
//!
//! Pure data: each [`TagGroup`] maps a label to the keywords that trigger it.
//! Keywords match case-insensitively on word boundaries, so list inflected forms
//! explicitly. Extend these tables without touching [`super::extract`].

/// A label and the keywords that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct TagGroup {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
}

/// Coarse session labels.
pub const WORKOUT_TYPES: &[TagGroup] = &[
    TagGroup { label: "leg day", triggers: &["leg day"] },
    TagGroup { label: "push day", triggers: &["push day"] },
    TagGroup { label: "pull day", triggers: &["pull day"] },
    TagGroup { label: "upper body", triggers: &["upper body", "upper day"] },
    TagGroup { label: "lower body", triggers: &["lower body", "lower day"] },
    TagGroup { label: "full body", triggers: &["full body", "total body"] },
    TagGroup {
        label: "strength",
        triggers: &["strength", "lifting", "lifted", "weights", "weightlifting", "powerlifting", "gym"],
    },
    TagGroup {
        label: "cardio",
        triggers: &[
            "cardio", "run", "ran", "running", "jog", "jogged", "jogging", "cycling", "cycled",
            "bike ride", "spin class", "swim", "swam", "swimming", "treadmill", "elliptical",
        ],
    },
    TagGroup { label: "hiit", triggers: &["hiit", "circuit", "circuits", "crossfit", "tabata"] },
    TagGroup {
        label: "yoga",
        triggers: &["yoga", "pilates", "stretching", "stretched", "mobility"],
    },
    TagGroup { label: "workout", triggers: &["workout", "workouts", "worked out", "training session", "exercise", "exercised"] },
];

/// Muscle groups.
pub const MUSCLE_GROUPS: &[TagGroup] = &[
    TagGroup {
        label: "legs",
        triggers: &[
            "leg", "legs", "quad", "quads", "quadriceps", "hamstring", "hamstrings", "calf", "calves",
            "squat", "squats", "lunge", "lunges", "leg press",
        ],
    },
    TagGroup { label: "glutes", triggers: &["glute", "glutes", "hip thrust", "hip thrusts"] },
    TagGroup {
        label: "chest",
        triggers: &["chest", "pec", "pecs", "bench press", "bench", "push-up", "push-ups", "pushups", "push ups"],
    },
    TagGroup {
        label: "back",
        triggers: &[
            "back", "lats", "lat pulldown", "lat pulldowns", "deadlift", "deadlifts", "pull-up",
            "pull-ups", "pullups", "pull ups", "row", "rows",
        ],
    },
    TagGroup {
        label: "shoulders",
        triggers: &["shoulder", "shoulders", "delt", "delts", "overhead press", "lateral raises"],
    },
    TagGroup {
        label: "arms",
        triggers: &["arm", "arms", "bicep", "biceps", "tricep", "triceps", "curl", "curls", "dips"],
    },
    TagGroup {
        label: "core",
        triggers: &["core", "abs", "plank", "planks", "crunch", "crunches", "sit-ups", "situps", "obliques"],
    },
];

/// Exercise names captured verbatim (case-folded) into `exercises`.
pub const EXERCISE_NAMES: &[&str] = &[
    "squat", "squats", "front squats", "deadlift", "deadlifts", "romanian deadlifts",
    "bench press", "incline bench", "leg press", "overhead press", "push-ups", "pushups",
    "push ups", "pull-ups", "pullups", "pull ups", "chin-ups", "lunges", "rows",
    "barbell rows", "lat pulldowns", "bicep curls", "curls", "tricep dips", "dips",
    "plank", "planks", "crunches", "burpees", "hip thrusts", "calf raises", "lateral raises",
    "kettlebell swings", "box jumps", "sprints", "run", "swim",
];

/// Numeric quantity patterns (regex source, case-insensitive).
///
/// Matches are whitespace-normalised before they enter `exercises`; the
/// sets-by-reps form additionally drops inner whitespace (`4 x 8` becomes `4x8`).
pub const QUANTITY_PATTERNS: &[&str] = &[
    r"\b\d+\s*x\s*\d+\b",
    r"\b\d+\s*(?:reps?|sets?)\b",
    r"\b\d+(?:\.\d+)?\s*(?:kg|kgs|lb|lbs|pounds)\b",
    r"\b\d+(?:\.\d+)?\s*(?:km|k run|miles?)\b",
];
