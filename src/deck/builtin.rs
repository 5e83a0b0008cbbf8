//! Decks compiled into the binary.

use crate::deck::types::{ChallengeScript, Deck, DeckVariant, SectionKind, SectionSpec, Theme};
use crate::quiz::QuizOption;

/// Ids of the built-in decks, in listing order.
pub const BUILTIN_IDS: &[&str] = &["statement", "cold-war", "negotiation", "fade-tour"];

pub fn all() -> Vec<Deck> {
    vec![statement(), cold_war(), negotiation(), fade_tour()]
}

pub fn find(id: &str) -> Option<Deck> {
    match id {
        "statement" => Some(statement()),
        "cold-war" => Some(cold_war()),
        "negotiation" => Some(negotiation()),
        "fade-tour" => Some(fade_tour()),
        _ => None,
    }
}

fn quiz(question: &str, options: &[(&str, bool)], explanation: &str) -> SectionKind {
    SectionKind::Quiz {
        question: question.to_string(),
        options: options
            .iter()
            .map(|(label, correct)| QuizOption::new(*label, *correct))
            .collect(),
        explanation: explanation.to_string(),
    }
}

fn challenge_sections(point_placeholder: &str, editor_body: &str) -> Vec<SectionSpec> {
    vec![
        SectionSpec::new(
            "main-point",
            "Your move",
            SectionKind::PointInput {
                placeholder: point_placeholder.to_string(),
            },
        )
        .with_body("Write the one idea your text must get across."),
        SectionSpec::new("edit-prompt", "Review the prompt", SectionKind::EditPrompt)
            .with_body(editor_body),
        SectionSpec::new(
            "result",
            "Result",
            SectionKind::Result {
                try_again: true,
                done: true,
            },
        ),
    ]
}

fn statement() -> Deck {
    let mut sections = vec![
        SectionSpec::new("intro", "Words under pressure", SectionKind::Intro).with_body(
            "A senior official has resigned. You will help the President's office \
             announce it, then see how the statement lands.",
        ),
        SectionSpec::new("context", "The situation", SectionKind::Content).with_body(
            "The Chief of Staff has stepped down after months of criticism. Allies abroad \
             are watching for signs of stability, and the departing official still has a \
             loyal following at home.",
        ),
        SectionSpec::new(
            "quiz-purpose",
            "Question 1",
            quiz(
                "What is the first job of an official statement about a resignation?",
                &[
                    ("Assign blame for what went wrong", false),
                    (
                        "Announce the decision clearly and keep confidence in the institution",
                        true,
                    ),
                    ("Avoid naming the position at all", false),
                ],
                "A resignation statement must settle the facts and show that the state keeps \
                 working. Blame and evasion both invite more questions.",
            ),
        ),
        SectionSpec::new(
            "quiz-tone",
            "Question 2",
            quiz(
                "Which tone is most likely to offend the departing official?",
                &[
                    ("Warm, specific gratitude", false),
                    ("Cold, purely procedural wording", true),
                    ("A brief personal acknowledgement", false),
                ],
                "Procedural language reads as dismissal. A departing ally who feels dismissed \
                 has every reason to answer back in public.",
            ),
        ),
    ];
    sections.extend(challenge_sections(
        "e.g. We are entering a new phase of efficiency",
        "This is the prompt that will be sent. Edit it if you like, then generate the statement.",
    ));

    Deck {
        id: "statement".to_string(),
        title: "Resignation statement".to_string(),
        variant: DeckVariant::Interactive,
        theme: Theme::Dark,
        promote_skip: false,
        challenge: Some(ChallengeScript {
            draft_template: "Write a short official public statement addressing the resignation \
                             of Chief of Staff Andriy Yermak.\nThe core message must be: \"{point}\"."
                .to_string(),
            response: STATEMENT_RESPONSE.to_string(),
            evaluation: STATEMENT_EVALUATION.to_string(),
            score: 7.0,
            speech_label: "Generate Speech".to_string(),
        }),
        sections,
    }
}

fn cold_war() -> Deck {
    let mut sections = vec![
        SectionSpec::new("intro", "Advising the President, 1961", SectionKind::Intro)
            .with_body(
                "You are a strategist in the new Kennedy administration. Test what you know \
                 about the Cold War, then write the core of a strategy memo.",
            ),
        SectionSpec::new(
            "quiz-sputnik",
            "Question 1",
            quiz(
                "What did the Soviet launch of Sputnik in 1957 set off in the United States?",
                &[
                    ("An immediate cut in defense spending", false),
                    ("A national push in science education and the creation of NASA", true),
                    ("Withdrawal from NATO", false),
                ],
                "Sputnik shocked American confidence. Congress answered with the National \
                 Defense Education Act and, in 1958, NASA.",
            ),
        ),
        SectionSpec::new(
            "quiz-crisis",
            "Question 2",
            quiz(
                "Which 1962 event brought the superpowers closest to nuclear war?",
                &[
                    ("The Berlin Airlift", false),
                    ("The Korean War armistice", false),
                    ("The Cuban Missile Crisis", true),
                ],
                "For thirteen days in October 1962 Soviet missiles in Cuba and a US naval \
                 quarantine pushed both sides to the edge.",
            ),
        ),
    ];
    sections.extend(challenge_sections(
        "e.g. Build more missiles",
        "This is the prompt for the memo. Adjust it, then generate the strategy.",
    ));

    Deck {
        id: "cold-war".to_string(),
        title: "Cold War strategy".to_string(),
        variant: DeckVariant::Interactive,
        theme: Theme::Dark,
        promote_skip: true,
        challenge: Some(ChallengeScript {
            draft_template: "Draft a short Cold War strategy memo for President Kennedy, early \
                             1960s, addressing how the United States should compete with the \
                             Soviet Union. The core of the strategy must be: \"{point}\"."
                .to_string(),
            response: COLD_WAR_RESPONSE.to_string(),
            evaluation: COLD_WAR_EVALUATION.to_string(),
            score: 8.0,
            speech_label: "Generate Strategy".to_string(),
        }),
        sections,
    }
}

fn negotiation() -> Deck {
    let mut sections = vec![
        SectionSpec::new("intro", "At the table", SectionKind::Intro).with_body(
            "Two neighbouring countries meet to settle a trade dispute. You open for your side.",
        ),
        SectionSpec::new(
            "quiz-opening",
            "Question 1",
            quiz(
                "What should an opening statement in a negotiation do first?",
                &[
                    ("State every concession you are willing to make", false),
                    ("Frame the shared interest before naming your demand", true),
                    ("Threaten to walk away", false),
                ],
                "Framing the shared interest keeps the other side listening. Concessions come \
                 later, threats close doors early.",
            ),
        ),
    ];
    sections.extend(challenge_sections(
        "e.g. Lower tariffs on grain",
        "This is the prompt for your opening statement. Edit it, then generate.",
    ));

    Deck {
        id: "negotiation".to_string(),
        title: "Trade negotiation".to_string(),
        variant: DeckVariant::Interactive,
        theme: Theme::Light,
        promote_skip: false,
        challenge: Some(ChallengeScript {
            draft_template: "Write a short opening statement for a trade negotiation between two \
                             neighbouring countries. The key demand must be: \"{point}\"."
                .to_string(),
            response: NEGOTIATION_RESPONSE.to_string(),
            evaluation: NEGOTIATION_EVALUATION.to_string(),
            score: 6.0,
            speech_label: "Generate Statement".to_string(),
        }),
        sections,
    }
}

fn fade_tour() -> Deck {
    Deck {
        id: "fade-tour".to_string(),
        title: "How this works".to_string(),
        variant: DeckVariant::Fade,
        theme: Theme::Light,
        promote_skip: false,
        challenge: None,
        sections: vec![
            SectionSpec::new("welcome", "Scroll to begin", SectionKind::Content)
                .with_theme(Theme::Light)
                .with_fade([
                    "Each lesson is a stack of full-screen panels.",
                    "Scroll with the mouse wheel, j/k or PageUp/PageDown.",
                ]),
            SectionSpec::new("quizzes", "Quizzes", SectionKind::Content)
                .with_theme(Theme::Dark)
                .with_fade([
                    "Pick an answer and you see right away whether it was correct.",
                    "A wrong pick also highlights the right one.",
                    "You can change your answer as often as you like.",
                ]),
            SectionSpec::new("challenge", "The challenge", SectionKind::Content).with_fade([
                "You write one key idea.",
                "A prompt is drafted around it, then a response streams in.",
                "An evaluation and a score close the round.",
            ]),
            SectionSpec::new("finish", "Ready", SectionKind::Content)
                .with_theme(Theme::Dark)
                .with_fade(["Pick a lesson with --deck and start."]),
        ],
    }
}

const STATEMENT_RESPONSE: &str = "Citizens of Ukraine,

Today, I have accepted the resignation of the Chief of Staff. This decision marks a new chapter in our administration's ongoing efforts to optimize our governance structures for maximum efficiency during these critical times.

We are entering a new phase of efficiency where every role must be aligned with our strategic path to victory. I thank the outgoing Chief for their service. The state machinery remains fully operational, and our focus is undeterred.

Let us remain united and focused on our shared goal. Glory to Ukraine.";

const STATEMENT_EVALUATION: &str = "OUTCOME:
- Foreign politicians congratulated Zelensky on the decisive move.
- However, the tone was too cold. **Yermak got offended** and just issued a public statement criticizing the President, significantly worsening Zelensky's political standing.

CRITIQUE:
The message was efficient but lacked the personal touch needed to manage the ego of a departing ally.

SUGGESTION:
You should have acknowledged his specific achievements to soften the blow and prevent retaliation.";

const COLD_WAR_RESPONSE: &str = "STRATEGIC RECOMMENDATION: Commit to a massive, highly visible space program—landing a man on the moon before the decade's end—and make it a top national priority.

RATIONALE: The Soviets will feel compelled to match us. Their economy cannot sustain the same level of spending on both military and space. By choosing a goal that is dramatic, peaceful, and technically demanding, we force them into a competition they cannot win without overstretching their resources. We restore American confidence, demonstrate the superiority of a free society, and pressure the USSR at a point of structural weakness.

REFERENCE: See textbook Ch. 14 (Economic Dimensions of the Cold War); Twentieth-Century Diplomacy, pp. 203–207.";

const COLD_WAR_EVALUATION: &str = "OUTCOME:
- Kennedy adopted a bold space goal in May 1961. The Apollo program became a top priority. The Soviet Union committed to a lunar program but lacked the economic capacity to sustain it—they abandoned their manned moon effort and shifted to space stations.

CRITIQUE:
This strategy combined prestige (demonstrating American leadership) with structural pressure. Historians note that Soviet budget constraints and technical failures contributed to their withdrawal from the moon race.

SUGGESTION:
You could have made the \"exhaust their economy\" angle more explicit in the memo, but the core idea—a massive, visible space race that the USSR would feel forced to match—was the right one.";

const NEGOTIATION_RESPONSE: &str = "Distinguished colleagues,

Our farmers and your millers depend on each other more than any tariff schedule admits. We come here to protect that bond.

Our request is simple: lower tariffs on grain, phased over three harvests, so both markets can adjust without shocks.

We are ready to discuss quotas, inspections and timelines in good faith.";

const NEGOTIATION_EVALUATION: &str = "OUTCOME:
- The other delegation agreed to continue talks and asked for a written schedule.

CRITIQUE:
The shared interest was framed well, but the demand came without anything offered in return.

SUGGESTION:
Pair the demand with a small, concrete concession to keep momentum.";
