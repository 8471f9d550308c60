//! Descriptive copy for category pages

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub reasons: [&'static str; 4],
}

const FALLBACK: CategoryInfo = CategoryInfo {
    description: "Explore this exciting game category and discover your game fun!",
    features: ["Exciting Game Experience", "High Quality Content", "Smooth Operation", "Fun Play"],
    reasons: ["Provide High-quality Entertainment", "Suitable for All Players", "Continuous Content Update", "Community Interaction"],
};

/// Copy for a category id; ids without bespoke copy get the generic text
pub fn category_info(category: &str) -> CategoryInfo {
    match category {
        "io" => CategoryInfo {
            description: "IO games are known for their simple and easy-to-learn gameplay and multiplayer competitive mode. These games usually have a simple graphic style but have strong competitive and strategic elements.",
            features: ["Multiplayer Competitive", "Simple Operation", "Real-time Battle System", "Leaderboard Competition"],
            reasons: ["Develop Competitive Awareness", "Improve Reaction Ability", "Enjoy Social Interaction", "Experience Growth Fun"],
        },
        "action" => CategoryInfo {
            description: "Action games focus on fast-paced game experiences, testing players' reaction speed and operation skills. From fighting to shooting, from platform jumping to adventure exploration, action games bring you exciting game experiences.",
            features: ["Fast-paced Combat", "Exciting Visual Effects", "Diverse Weapon Systems", "Challenging Level Design"],
            reasons: ["Release Pressure", "Improve Hand-eye Coordination", "Challenge Self Limit", "Enjoy Stimulating Experience"],
        },
        "puzzle" => CategoryInfo {
            description: "Puzzle games exercise your logical thinking and problem-solving abilities. Whether it's classic digital games or innovative puzzle challenges, they can help you improve your intelligence while having fun.",
            features: ["Develop Logical Thinking", "Progressive Difficulty Design", "Innovative Puzzle Mechanism", "Achievement System"],
            reasons: ["Develop Intelligence", "Improve Focus", "Develop Patience", "Achievement Feeling"],
        },
        "racing" => CategoryInfo {
            description: "Racing games let you experience the perfect combination of speed and passion. From karting to super sports cars, from street racing to professional tracks, they satisfy all your fantasies about speed.",
            features: ["Realistic Physics Engine", "Diverse Tracks", "Vehicle Modification System", "Multiplayer Racing Mode"],
            reasons: ["Experience Speed Passion", "Learn Driving Skills", "Enjoy Competition Fun", "Relax Mind"],
        },
        "casual" => CategoryInfo {
            description: "Casual games are characterized by easy and pleasant game experiences, suitable for players of all ages. Simple operations and fun gameplay allow you to enjoy games anytime and anywhere.",
            features: ["Easy to Learn", "Short Game Experience", "Cute Graphic Style", "Relaxing Mood"],
            reasons: ["Entertainment Anytime", "Relieve Work Pressure", "Simple to Understand", "Old and Young"],
        },
        "clicker" => CategoryInfo {
            description: "Clicker games offer addictive incremental gameplay where you build progress through clicking and automation. Start simple and gradually unlock powerful upgrades and achievements.",
            features: ["Progressive Upgrades", "Idle Automation", "Achievement System", "Number Growth Satisfaction"],
            reasons: ["Relaxing Gameplay", "Sense of Progress", "Perfect for Multitasking", "Satisfying Number Growth"],
        },
        "sports" => CategoryInfo {
            description: "Sports games bring sports projects from reality to the virtual world. Whether it's football, basketball, or other sports, they can let you feel the charm of competitive sports.",
            features: ["Realistic Sports Experience", "Professional Rule Setting", "Team Cooperation Mode", "Skill Improvement System"],
            reasons: ["Develop Tactical Thinking", "Experience Team Cooperation", "Learn Sports Rules", "Develop Sports Spirit"],
        },
        "kids" => CategoryInfo {
            description: "Children's games are designed for young players, with educational significance and fun. Safe game environments and age-appropriate content allow children to learn and grow in games.",
            features: ["Educational Significance", "Safe Content", "Interactive Learning", "Creative Ability"],
            reasons: ["Educational Fun", "Creative Ability", "Develop Learning Interest", "Safe and Healthy"],
        },
        _ => FALLBACK,
    }
}
