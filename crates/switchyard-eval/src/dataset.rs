// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded benchmark question sets.
//!
//! Small fixed samples: GSM8K grade-school math problems scored by numeric
//! answer extraction, and LAMA factual-recall probes scored by substring
//! matching.

/// One benchmark item.
#[derive(Debug, Clone, Copy)]
pub struct EvalItem {
    pub prompt: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

/// Grade-school math word problems with integer answers.
pub const GSM8K_PROBLEMS: &[EvalItem] = &[
    EvalItem {
        prompt: "Janet's ducks lay 16 eggs per day. She eats 3 for breakfast every morning and bakes muffins for her friends every day with 4. She sells the remainder at the farmers' market daily for $2 per fresh duck egg. How much in dollars does she make every day at the farmers' market?",
        answer: "18",
        category: "word_problem",
    },
    EvalItem {
        prompt: "A robe takes 2 bolts of blue fiber and half that much white fiber. How many bolts in total does it take?",
        answer: "3",
        category: "basic_arithmetic",
    },
    EvalItem {
        prompt: "Josh decides to try flipping a house. He buys a house for $80,000 and then puts in $50,000 in repairs. This increased the value of the house by 150%. How much profit did he make?",
        answer: "65000",
        category: "percentages",
    },
    EvalItem {
        prompt: "There are 15 trees in the grove. Grove workers will plant trees today. After they are done there will be 21 trees. How many trees did the grove workers plant today?",
        answer: "6",
        category: "subtraction",
    },
    EvalItem {
        prompt: "If there are 3 cars in the parking lot and 2 more cars arrive, how many cars are in the parking lot?",
        answer: "5",
        category: "addition",
    },
    EvalItem {
        prompt: "Leah had 32 chocolates and her sister had 42. If they ate 35, how many pieces do they have left in total?",
        answer: "39",
        category: "multi_step",
    },
    EvalItem {
        prompt: "Jason had 20 lollipops. He gave Denny some lollipops. Now Jason has 12 lollipops. How many lollipops did Jason give to Denny?",
        answer: "8",
        category: "subtraction",
    },
    EvalItem {
        prompt: "Shawn has five toys. For Christmas, he got two toys each from his mom and dad. How many toys does he have now?",
        answer: "9",
        category: "addition",
    },
    EvalItem {
        prompt: "There were nine computers in the server room. Five more computers were installed each day, from monday to thursday. How many computers are now in the server room?",
        answer: "29",
        category: "multi_step",
    },
    EvalItem {
        prompt: "Michael had 58 golf balls. On tuesday, he lost 23 golf balls. On wednesday, he lost 2 more. How many golf balls did he have at the end of wednesday?",
        answer: "33",
        category: "multi_step",
    },
];

/// Factual-recall probes.
pub const LAMA_QUESTIONS: &[EvalItem] = &[
    EvalItem {
        prompt: "The capital of France is",
        answer: "Paris",
        category: "geography",
    },
    EvalItem {
        prompt: "Water boils at __ degrees Celsius",
        answer: "100",
        category: "science",
    },
    EvalItem {
        prompt: "The largest planet in our solar system is",
        answer: "Jupiter",
        category: "astronomy",
    },
    EvalItem {
        prompt: "Shakespeare wrote",
        answer: "Hamlet",
        category: "literature",
    },
    EvalItem {
        prompt: "The formula for the area of a circle is",
        answer: "πr²",
        category: "mathematics",
    },
    EvalItem {
        prompt: "The first president of the United States was",
        answer: "George Washington",
        category: "history",
    },
    EvalItem {
        prompt: "DNA stands for",
        answer: "Deoxyribonucleic acid",
        category: "biology",
    },
    EvalItem {
        prompt: "The speed of light is approximately __ meters per second",
        answer: "300000000",
        category: "physics",
    },
    EvalItem {
        prompt: "The currency of Japan is",
        answer: "Yen",
        category: "geography",
    },
    EvalItem {
        prompt: "The smallest unit of matter is",
        answer: "atom",
        category: "chemistry",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_are_nonempty_and_labeled() {
        assert_eq!(GSM8K_PROBLEMS.len(), 10);
        assert_eq!(LAMA_QUESTIONS.len(), 10);
        for item in GSM8K_PROBLEMS.iter().chain(LAMA_QUESTIONS) {
            assert!(!item.prompt.is_empty());
            assert!(!item.answer.is_empty());
            assert!(!item.category.is_empty());
        }
    }

    #[test]
    fn gsm8k_answers_are_integers() {
        for item in GSM8K_PROBLEMS {
            assert!(item.answer.parse::<i64>().is_ok(), "bad answer {}", item.answer);
        }
    }
}
