//! Ripple, the canned hydration assistant. Replies are selected by substring
//! matching against an ordered rule table; only the no-match fallback draws
//! from a pseudorandom pool. Matching and rendering are deterministic so the
//! rule set stays testable without the UI's simulated typing delay.

use rand::Rng;
use tracing::debug;

use crate::models::mood::{MoodEnergyState, MoodLevel};

/// Context snapshot the presentation layer passes along with each message.
#[derive(Debug, Clone, Copy)]
pub struct AssistantContext {
    pub consumed_ml: i64,
    pub goal_ml: i64,
    pub state: MoodEnergyState,
}

impl AssistantContext {
    fn percent_of_goal(&self) -> i64 {
        let goal = self.goal_ml.max(1);
        ((self.consumed_ml as f64 / goal as f64) * 100.0).round() as i64
    }

    fn remaining_ml(&self) -> i64 {
        (self.goal_ml - self.consumed_ml).max(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTopic {
    Energy,
    Reminders,
    Goal,
    Mood,
    Skin,
    Exercise,
    Morning,
    Caffeine,
    HabitDifficulty,
    Thanks,
}

/// One entry of the responder's rule table. A message matches when any of
/// the keywords appears in its lowercased text; the first matching rule
/// wins, so table order is part of the contract.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub topic: ResponseTopic,
}

pub const RULES: &[ResponseRule] = &[
    ResponseRule {
        keywords: &["tired", "energy"],
        topic: ResponseTopic::Energy,
    },
    ResponseRule {
        keywords: &["remind", "forget"],
        topic: ResponseTopic::Reminders,
    },
    ResponseRule {
        keywords: &["goal", "target"],
        topic: ResponseTopic::Goal,
    },
    ResponseRule {
        keywords: &["mood", "feel"],
        topic: ResponseTopic::Mood,
    },
    ResponseRule {
        keywords: &["skin", "glow"],
        topic: ResponseTopic::Skin,
    },
    ResponseRule {
        keywords: &["exercise", "workout"],
        topic: ResponseTopic::Exercise,
    },
    ResponseRule {
        keywords: &["morning", "wake"],
        topic: ResponseTopic::Morning,
    },
    ResponseRule {
        keywords: &["coffee", "caffeine"],
        topic: ResponseTopic::Caffeine,
    },
    ResponseRule {
        keywords: &["hard", "difficult"],
        topic: ResponseTopic::HabitDifficulty,
    },
    ResponseRule {
        keywords: &["thank", "thanks"],
        topic: ResponseTopic::Thanks,
    },
];

pub const DEFAULT_REPLY_COUNT: usize = 4;

/// First rule whose keywords appear in the message, if any.
pub fn match_rule(message: &str) -> Option<&'static ResponseRule> {
    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
}

/// Render the canned reply for a topic against the current context.
pub fn render_topic(topic: ResponseTopic, ctx: &AssistantContext) -> String {
    match topic {
        ResponseTopic::Energy => format!(
            "I notice your energy is {}. Dehydration is a major cause of fatigue! \
             Try drinking 250ml now and another glass in 30 minutes. Your brain is \
             75% water, so even mild dehydration can affect your energy levels.",
            ctx.state.energy
        ),
        ResponseTopic::Reminders => "I can help you remember! Based on your current intake, \
             I recommend drinking water every 90 minutes. Would you like me to send you gentle \
             reminders? I'll make them personalized based on your activity and mood."
            .to_string(),
        ResponseTopic::Goal => {
            let remaining = ctx.remaining_ml();
            if remaining == 0 {
                format!(
                    "Amazing! You've already hit your {}ml goal today! \u{1F389} Keep sipping \
                     to maintain optimal hydration. Your body will thank you!",
                    ctx.goal_ml
                )
            } else {
                let glasses = (remaining as f64 / 250.0).ceil() as i64;
                format!(
                    "You need {}ml more to reach your {}ml goal. That's about {} more \
                     glasses. You're doing great - {}% there!",
                    remaining,
                    ctx.goal_ml,
                    glasses,
                    ctx.percent_of_goal()
                )
            }
        }
        ResponseTopic::Mood => {
            if ctx.state.mood == MoodLevel::Low {
                "I see your mood is low today. Dehydration can definitely affect how we \
                 feel! Try drinking a full glass of water slowly. Studies show that even 2% \
                 dehydration can impact mood and cognitive function."
                    .to_string()
            } else {
                format!(
                    "Your mood seems {} today! Staying hydrated helps maintain stable \
                     energy and mood throughout the day. Keep up the great work!",
                    ctx.state.mood
                )
            }
        }
        ResponseTopic::Skin => "Great question! Proper hydration is key for healthy, glowing \
             skin. Your skin is 30% water, so staying hydrated helps maintain elasticity and \
             that natural glow. Aim for consistent intake throughout the day rather than large \
             amounts at once."
            .to_string(),
        ResponseTopic::Exercise => "For workouts, drink 250ml about 30 minutes before \
             exercising, then 150-200ml every 15-20 minutes during activity. After your \
             workout, drink 150% of the fluid you lost through sweat. Your performance can \
             drop by 10% with just 2% dehydration!"
            .to_string(),
        ResponseTopic::Morning => "Perfect timing! Your body loses about 1-2 pounds of water \
             overnight through breathing and sweating. Start your day with 500ml of water to \
             rehydrate and kickstart your metabolism. It's like giving your body a gentle \
             wake-up call!"
            .to_string(),
        ResponseTopic::Caffeine => "Coffee counts toward hydration, but caffeine has a mild \
             diuretic effect. For every cup of coffee, try to drink an extra glass of water. \
             The good news? Your body adapts to regular caffeine intake, so the diuretic \
             effect decreases over time."
            .to_string(),
        ResponseTopic::HabitDifficulty => "I understand! Building new habits takes time. Try \
             these tricks: use a water bottle with time markers, add a slice of lemon or \
             cucumber for flavor, or set your phone to remind you every hour. Small, \
             consistent steps lead to big changes!"
            .to_string(),
        ResponseTopic::Thanks => "You're so welcome! I'm here to support your hydration \
             journey. Remember, every sip counts, and you're already making great progress. \
             Keep up the amazing work! \u{1F4A7}"
            .to_string(),
    }
}

/// Generic reply used when no rule matches. `index` must be below
/// [`DEFAULT_REPLY_COUNT`].
pub fn default_reply(index: usize, ctx: &AssistantContext) -> String {
    match index % DEFAULT_REPLY_COUNT {
        0 => format!(
            "That's a great question! Based on your current progress ({}ml today), you're \
             doing well. Remember, consistency is key - small, frequent sips work better than \
             large amounts at once.",
            ctx.consumed_ml
        ),
        1 => "I'm here to help you succeed! Your hydration journey is unique, and I'll \
             provide personalized tips based on your mood, energy, and daily patterns. What \
             specific area would you like to focus on?"
            .to_string(),
        2 => "Interesting! Did you know that your brain is 75% water? That's why proper \
             hydration is so important for focus, mood, and energy. How has your hydration \
             been affecting how you feel today?"
            .to_string(),
        _ => format!(
            "Every drop counts! You're {}% toward your goal. I love helping people discover \
             how much better they feel when properly hydrated. What changes have you noticed?",
            ctx.percent_of_goal()
        ),
    }
}

/// Opening message shown when the chat screen mounts.
pub fn greeting(ctx: &AssistantContext) -> String {
    format!(
        "Hi! I'm Ripple, your AI hydration assistant. I see you're at {}ml today - that's \
         {}% of your goal! How can I help you stay hydrated?",
        ctx.consumed_ml,
        ctx.percent_of_goal()
    )
}

/// Full response path: rule table first, pseudorandom generic reply on a
/// miss. This is the only nondeterministic entry point.
pub fn respond(ctx: &AssistantContext, message: &str) -> String {
    match match_rule(message) {
        Some(rule) => {
            debug!(target: "app::assistant", topic = ?rule.topic, "rule matched");
            render_topic(rule.topic, ctx)
        }
        None => {
            let index = rand::thread_rng().gen_range(0..DEFAULT_REPLY_COUNT);
            debug!(target: "app::assistant", index, "no rule matched, using default pool");
            default_reply(index, ctx)
        }
    }
}
