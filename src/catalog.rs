//! Recorded-move catalog: dataset identifiers and the move names they ship.

/// Hugging Face dataset holding the emotion animations.
pub const EMOTIONS_DATASET: &str = "pollen-robotics/reachy-mini-emotions-library";

/// Hugging Face dataset holding the dance animations.
pub const DANCES_DATASET: &str = "pollen-robotics/reachy-mini-dances-library";

/// Emotions available in [`EMOTIONS_DATASET`].
pub const EMOTIONS: &[&str] = &[
    "amazed1", "anxiety1", "attentive1", "attentive2", "boredom1", "boredom2", "calming1",
    "cheerful1", "come1", "confused1", "contempt1", "curious1", "dance1", "dance2", "dance3",
    "disgusted1", "displeased1", "displeased2", "downcast1", "dying1", "electric1",
    "enthusiastic1", "enthusiastic2", "exhausted1", "fear1", "frustrated1", "furious1", "go_away1",
    "grateful1", "helpful1", "helpful2", "impatient1", "impatient2", "incomprehensible2",
    "indifferent1", "inquiring1", "inquiring2", "inquiring3", "irritated1", "irritated2",
    "laughing1", "laughing2", "lonely1", "lost1", "loving1", "no1", "no_excited1", "no_sad1",
    "oops1", "oops2", "proud1", "proud2", "proud3", "rage1", "relief1", "relief2", "reprimand1",
    "reprimand2", "reprimand3", "resigned1", "sad1", "sad2", "scared1", "serenity1", "shy1",
    "sleep1", "success1", "success2", "surprised1", "surprised2", "thoughtful1", "thoughtful2",
    "tired1", "uncertain1", "uncomfortable1", "understanding1", "understanding2", "welcoming1",
    "welcoming2", "yes1", "yes_sad1",
];

/// Dances available in [`DANCES_DATASET`].
pub const DANCES: &[&str] = &[
    "chicken_peck", "chin_lead", "dizzy_spin", "grid_snap", "groovy_sway_and_roll",
    "head_tilt_roll", "interwoven_spirals", "jackson_square", "neck_recoil", "pendulum_swing",
    "polyrhythm_combo", "sharp_side_tilt", "side_glance_flick", "side_peekaboo",
    "side_to_side_sway", "simple_nod", "stumble_and_recover", "uh_huh_tilt", "yeah_nod",
];
