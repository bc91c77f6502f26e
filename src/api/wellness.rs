use crate::api::schemas::wellness::{PromptBody, TechniqueBody, TechniquesBody};
use axum::Json;
use rand::seq::SliceRandom;

pub const LOOP_BREAKER_PROMPTS: [&str; 10] = [
    "Name three things you can see right now that you have never noticed before.",
    "Stand up, stretch your arms overhead, and take one slow breath.",
    "Write down the thought that keeps looping, then close the page.",
    "Drink a glass of water slowly, paying attention to each sip.",
    "Step outside, or look out a window, and find the farthest thing you can see.",
    "Hum a tune you liked as a child, all the way through.",
    "Count backwards from thirty, one number per breath.",
    "Touch five different textures around you and name each one.",
    "Think of one small thing you can finish in the next two minutes, and do it.",
    "Say out loud: this thought is a visitor, and it can leave.",
];

/// One gentle redirection, chosen uniformly at random. No persistence.
pub async fn loop_breaker_prompt() -> Json<PromptBody> {
    let prompt = LOOP_BREAKER_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(LOOP_BREAKER_PROMPTS[0]);

    Json(PromptBody { prompt })
}

const TECHNIQUES: [TechniqueBody; 5] = [
    TechniqueBody {
        name: "4-7-8 Breathing",
        instructions: "Inhale through your nose for 4 counts, hold for 7, exhale slowly through your mouth for 8. Repeat four times.",
        duration: "2 minutes",
    },
    TechniqueBody {
        name: "Box Breathing",
        instructions: "Inhale for 4 counts, hold for 4, exhale for 4, hold for 4. Picture tracing the sides of a square as you go.",
        duration: "3 minutes",
    },
    TechniqueBody {
        name: "5-4-3-2-1 Grounding",
        instructions: "Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, and 1 you can taste.",
        duration: "5 minutes",
    },
    TechniqueBody {
        name: "Body Scan",
        instructions: "Starting at your toes, slowly move your attention up through your body, relaxing each part as you reach it.",
        duration: "10 minutes",
    },
    TechniqueBody {
        name: "Palm Press",
        instructions: "Press your palms together firmly for ten seconds, then release and notice the warmth and tingling.",
        duration: "1 minute",
    },
];

/// The fixed technique list; static data, no randomness, no persistence.
pub async fn breath_ground() -> Json<TechniquesBody> {
    Json(TechniquesBody { techniques: TECHNIQUES.to_vec() })
}
