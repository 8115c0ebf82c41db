// ABOUTME: Static nutrition and habit knowledge base with vitality/toxicity scoring
// ABOUTME: Free-text lookup by case-insensitive name match plus general tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::random::RandomSource;
use serde::Serialize;

/// What kind of thing an entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Solid food
    Food,
    /// Beverage
    Drink,
    /// Daily habit or routine
    Habit,
    /// Training modality
    Exercise,
}

/// Direction of an entry's effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Positive score
    Vitality,
    /// Negative score
    Toxicity,
    /// Zero score
    Neutral,
}

/// One knowledge base entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeItem {
    /// Stable identifier
    pub id: &'static str,
    /// Display name, also the lookup key
    pub name: &'static str,
    /// Entry category
    pub category: ItemCategory,
    /// Effect direction
    pub effect: Effect,
    /// Positive for vitality, negative for toxicity
    pub score: i32,
    /// System message shown on match
    pub message: &'static str,
    /// Free-form tags
    pub tags: &'static [&'static str],
}

/// Every known entry, in lookup priority order
pub const KNOWLEDGE_BASE: &[KnowledgeItem] = &[
    KnowledgeItem {
        id: "chicken_breast",
        name: "Chicken Breast",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 10,
        message: "Lean protein detected. Muscle synthesis initializing.",
        tags: &["protein", "lean"],
    },
    KnowledgeItem {
        id: "salmon",
        name: "Salmon",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 12,
        message: "Omega-3 fatty acids acquired. Cognitive and joint function reinforced.",
        tags: &["protein", "healthy_fats"],
    },
    KnowledgeItem {
        id: "broccoli",
        name: "Broccoli",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 8,
        message: "Micronutrients assimilated. Cellular defense boosted.",
        tags: &["vegetable", "fiber"],
    },
    KnowledgeItem {
        id: "oats",
        name: "Oats",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 7,
        message: "Complex carbohydrates loaded. Sustained energy levels optimized.",
        tags: &["carbs", "fiber"],
    },
    KnowledgeItem {
        id: "greek_yogurt",
        name: "Greek Yogurt",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 9,
        message: "Probiotics and casein protein found. Gut health and recovery enhanced.",
        tags: &["protein", "dairy"],
    },
    KnowledgeItem {
        id: "eggs",
        name: "Eggs",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 9,
        message: "Bioavailable protein and choline secured. Anabolic state supported.",
        tags: &["protein", "fats"],
    },
    KnowledgeItem {
        id: "blueberries",
        name: "Blueberries",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 8,
        message: "Antioxidant surgeon deployed. Oxidative stress reducing.",
        tags: &["fruit", "antioxidant"],
    },
    KnowledgeItem {
        id: "soda",
        name: "Soda",
        category: ItemCategory::Drink,
        effect: Effect::Toxicity,
        score: -15,
        message: "WARNING: High sugar content. Insulin spike imminent. Metabolic disruption detected.",
        tags: &["sugar", "processed"],
    },
    KnowledgeItem {
        id: "processed_meat",
        name: "Processed Meat",
        category: ItemCategory::Food,
        effect: Effect::Toxicity,
        score: -10,
        message: "WARNING: Nitrates and high sodium. Cardiovascular stress increased.",
        tags: &["processed", "sodium"],
    },
    KnowledgeItem {
        id: "alcohol",
        name: "Alcohol",
        category: ItemCategory::Drink,
        effect: Effect::Toxicity,
        score: -20,
        message: "CRITICAL WARNING: Toxin detected. Liver workload maximum. Muscle recovery Halted.",
        tags: &["alcohol", "toxin"],
    },
    KnowledgeItem {
        id: "fried_food",
        name: "Deep Fried Food",
        category: ItemCategory::Food,
        effect: Effect::Toxicity,
        score: -12,
        message: "WARNING: Trans fats identified. Inflammation markers rising.",
        tags: &["fat", "processed"],
    },
    KnowledgeItem {
        id: "water",
        name: "Water",
        category: ItemCategory::Drink,
        effect: Effect::Vitality,
        score: 5,
        message: "Hydration levels restored. Biological functions optimized.",
        tags: &["hydration"],
    },
    KnowledgeItem {
        id: "green_tea",
        name: "Green Tea",
        category: ItemCategory::Drink,
        effect: Effect::Vitality,
        score: 7,
        message: "Catechins absorbed. Metabolic rate slightly enhanced.",
        tags: &["antioxidant", "caffeine"],
    },
    KnowledgeItem {
        id: "sleep_8h",
        name: "8 Hours Sleep",
        category: ItemCategory::Habit,
        effect: Effect::Vitality,
        score: 20,
        message: "Optimal recovery cycle completed. Growth hormone secretion maximized.",
        tags: &["recovery"],
    },
    KnowledgeItem {
        id: "weight_lifting",
        name: "Weight Lifting",
        category: ItemCategory::Exercise,
        effect: Effect::Vitality,
        score: 15,
        message: "Hypertrophy stimulus applied. Muscle tissue remodeling initiated.",
        tags: &["strength"],
    },
    KnowledgeItem {
        id: "cardio",
        name: "Cardio",
        category: ItemCategory::Exercise,
        effect: Effect::Vitality,
        score: 10,
        message: "Cardiovascular output increased. Endurance capacity expanding.",
        tags: &["cardio"],
    },
    KnowledgeItem {
        id: "sunscreen",
        name: "Sunscreen",
        category: ItemCategory::Habit,
        effect: Effect::Vitality,
        score: 10,
        message: "UV Shield Active. Collagen preservation initialized. Aging delayed.",
        tags: &["skincare", "looks"],
    },
    KnowledgeItem {
        id: "retinol",
        name: "Retinol",
        category: ItemCategory::Habit,
        effect: Effect::Vitality,
        score: 8,
        message: "Cellular turnover accelerated. Skin texture refinement optimization.",
        tags: &["skincare", "looks"],
    },
    KnowledgeItem {
        id: "moisturizer",
        name: "Moisturizer",
        category: ItemCategory::Habit,
        effect: Effect::Vitality,
        score: 5,
        message: "Epidermal barrier reinforced. Hydration glow active.",
        tags: &["skincare", "looks"],
    },
    KnowledgeItem {
        id: "face_wash",
        name: "Face Wash",
        category: ItemCategory::Habit,
        effect: Effect::Vitality,
        score: 5,
        message: "Pore debris eliminated. Surface bacteria neutralized.",
        tags: &["skincare", "looks"],
    },
    KnowledgeItem {
        id: "cold_shower",
        name: "Cold Shower",
        category: ItemCategory::Habit,
        effect: Effect::Vitality,
        score: 7,
        message: "Thermic shock initiated. Blood circulation and alertness boosted.",
        tags: &["health", "looks"],
    },
    KnowledgeItem {
        id: "mewing",
        name: "Mewing",
        category: ItemCategory::Habit,
        effect: Effect::Vitality,
        score: 5,
        message: "Tongue posture corrected. Jawline definition protocol active.",
        tags: &["looks", "posture"],
    },
    KnowledgeItem {
        id: "neck_curls",
        name: "Neck Training",
        category: ItemCategory::Exercise,
        effect: Effect::Vitality,
        score: 8,
        message: "Neck hypertrophy stimulus. Aesthetics and durability enhanced.",
        tags: &["looks", "strength"],
    },
    KnowledgeItem {
        id: "carrots",
        name: "Carrots",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 6,
        message: "Beta-carotene assimilated. Skin tone warmth increasing.",
        tags: &["food", "looks"],
    },
    KnowledgeItem {
        id: "collagen_peptides",
        name: "Collagen",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 8,
        message: "Connective tissue reinforcement. Skin elasticity improved.",
        tags: &["food", "looks"],
    },
    KnowledgeItem {
        id: "dark_chocolate",
        name: "Dark Chocolate",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 5,
        message: "Flavonoids detected. Skin blood flow improved.",
        tags: &["food", "looks"],
    },
    KnowledgeItem {
        id: "avocado",
        name: "Avocado",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 9,
        message: "Healthy fats loaded. Skin hydration from within.",
        tags: &["food", "looks"],
    },
    KnowledgeItem {
        id: "sweet_potato",
        name: "Sweet Potato",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 7,
        message: "Vitamin A synthesis. Natural glow enhancement.",
        tags: &["food", "looks"],
    },
    KnowledgeItem {
        id: "idli",
        name: "Idli",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 9,
        message: "Fermented goodness. Gut health optimized. Sustainable energy.",
        tags: &["gut_health", "carb"],
    },
    KnowledgeItem {
        id: "dosa",
        name: "Dosa",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 7,
        message: "Crisp lentil crepe. Protein and carb balance detected.",
        tags: &["carb", "protein"],
    },
    KnowledgeItem {
        id: "sambar",
        name: "Sambar",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 8,
        message: "Lentil matrix with vegetable infusion. Fiber and protein acquired.",
        tags: &["protein", "fiber"],
    },
    KnowledgeItem {
        id: "rasam",
        name: "Rasam",
        category: ItemCategory::Drink,
        effect: Effect::Vitality,
        score: 8,
        message: "Digestive fire igniter. Turmeric and tamarind immunity boost.",
        tags: &["immunity", "digestion"],
    },
    KnowledgeItem {
        id: "ragi_mudde",
        name: "Ragi Mudde",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 10,
        message: "Finger millet detected. Calcium overload. Low GI power source.",
        tags: &["superfood", "calcium"],
    },
    KnowledgeItem {
        id: "curd_rice",
        name: "Curd Rice",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 9,
        message: "Probiotic coolant. Gut microbiome restoration complete.",
        tags: &["probiotic", "gut_health"],
    },
    KnowledgeItem {
        id: "coconut_chutney",
        name: "Coconut Chutney",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 7,
        message: "MCT oils identified. Healthy fat metabolism active.",
        tags: &["healthy_fats"],
    },
    KnowledgeItem {
        id: "upma",
        name: "Upma",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 6,
        message: "Semolina fuel. Moderate energy release.",
        tags: &["carb"],
    },
    KnowledgeItem {
        id: "chicken_chettinad",
        name: "Chicken Chettinad",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 9,
        message: "Spiced protein synthesis. Thermogenic effect active.",
        tags: &["protein", "spicy"],
    },
    KnowledgeItem {
        id: "filter_coffee",
        name: "Filter Coffee",
        category: ItemCategory::Drink,
        effect: Effect::Vitality,
        score: 6,
        message: "Caffeine stimulant. Mental focus sharpened. Watch cortisol.",
        tags: &["caffeine", "focus"],
    },
    KnowledgeItem {
        id: "medu_vada",
        name: "Medu Vada",
        category: ItemCategory::Food,
        effect: Effect::Toxicity,
        score: -5,
        message: "Deep fried lentil. Delicious but lipids elevated. Moderate intake.",
        tags: &["probiotic", "toxin"],
    },
    KnowledgeItem {
        id: "pongal",
        name: "Pongal",
        category: ItemCategory::Food,
        effect: Effect::Vitality,
        score: 7,
        message: "Lentil rice harvest. Comfort fuel derived.",
        tags: &["carb", "protein"],
    },
];

/// General tips shown when nothing matched
pub const GENERAL_TIPS: &[&str] = &[
    "Hydration Check: Drink a glass of water now. Clear skin requires hydration.",
    "Posture Correction: Align your spine. Confidence and height perception improve with posture.",
    "Jawline Check: Close your mouth, breathe through your nose. Tongue on the roof.",
    "Sunlight Exposure: 10 mins direct sun for Vitamin D and mood. Don't burn.",
    "Sleep Protocol: 7-9 hours is non-negotiable for 'Beauty Sleep' (HGH Release).",
    "Digital Detox: Reduce blue light 1 hour before bed to prevent dark circles.",
    "Collagen Banking: Eat Vitamin C with protein to synthesize collagen.",
    "Strategic Fasting: 12-16 hour Intermittent Fasting reduces bloating and sharpens features.",
    "Spices Update: Turmeric in your diet is a natural anti-inflammatory glow booster.",
];

/// First entry whose name appears case-insensitively in `input`
///
/// # Examples
///
/// ```rust
/// use pierre_quest_intelligence::knowledge_base::analyze_input;
///
/// let item = analyze_input("had a soda with lunch").map(|item| item.id);
/// assert_eq!(item, Some("soda"));
/// ```
#[must_use]
pub fn analyze_input(input: &str) -> Option<&'static KnowledgeItem> {
    let normalized = input.to_lowercase();
    KNOWLEDGE_BASE
        .iter()
        .find(|item| normalized.contains(&item.name.to_lowercase()))
}

/// Uniformly chosen general tip
pub fn random_tip<R>(rng: &mut R) -> &'static str
where
    R: RandomSource + ?Sized,
{
    GENERAL_TIPS[rng.next_index(GENERAL_TIPS.len())]
}
