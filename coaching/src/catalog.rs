//! The fixed drill catalog.
//!
//! Declaration order is a behavioral contract: the matcher and the ranker
//! both scan the catalog front to back with first-match-wins semantics.

use crate::drill::{Difficulty, Drill, DrillCategory};
use std::sync::OnceLock;

/// The built-in drill catalog, in declaration order. Never mutated.
pub fn catalog() -> &'static [Drill] {
    static CATALOG: OnceLock<Vec<Drill>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn drill(
    id: &str,
    title: &str,
    description: &str,
    steps: &[&str],
    category: DrillCategory,
    difficulty: Difficulty,
    duration: &str,
) -> Drill {
    Drill {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        category,
        difficulty,
        duration: duration.to_string(),
    }
}

fn build_catalog() -> Vec<Drill> {
    vec![
        drill(
            "tee-height",
            "High/Low Tee Work",
            "Work on maintaining a consistent swing plane across different strike zone heights.",
            &[
                "Set the tee to the top of your strike zone (letters).",
                "Focus on a slight downward or level path to the ball to prevent popping up.",
                "Take 10 swings at the high location.",
                "Lower the tee to the bottom of the zone (knees).",
                "Focus on \"staying through\" the ball and using your legs to stay low.",
                "Take 10 swings at the low location.",
            ],
            DrillCategory::Path,
            Difficulty::Beginner,
            "15 mins",
        ),
        drill(
            "stop-at-contact",
            "Stop at Contact",
            "Swing and freeze at the point of impact to check your palm-up/palm-down position.",
            &[
                "Take a normal setup and load.",
                "Swing at 75% speed and abruptly stop the bat at the point of impact.",
                "Check that your lead arm is firm and your top hand palm is facing up.",
                "Ensure your head is steady and eyes are on the contact point.",
                "Repeat 15 times to build muscle memory of the contact position.",
            ],
            DrillCategory::Path,
            Difficulty::Intermediate,
            "10 mins",
        ),
        drill(
            "walking-start",
            "Walking Happy Gilmore",
            "Develop momentum and rhythmic weight transfer from your load to your stride.",
            &[
                "Stand 3 feet behind your normal hitting position.",
                "Step forward with your rear foot, then your lead foot in a rhythmic motion.",
                "As your lead foot plants, begin your load and fire the swing.",
                "Focus on the feeling of weight transferring from your back hip to your front side.",
                "Perform 10 reps focusing on fluidity, not max power.",
            ],
            DrillCategory::Load,
            Difficulty::Advanced,
            "20 mins",
        ),
        drill(
            "narrow-stance",
            "Narrow Stance Drill",
            "Forces better balance and core engagement by starting with feet close together.",
            &[
                "Stand with your feet nearly touching in the box.",
                "Take a small, controlled stride forward.",
                "Keep your head center-mass and do not let it drift forward with the stride.",
                "Focus on your core rotating around a central pillar.",
                "Perform 20 swings focusing on maintaining perfect balance after the follow-through.",
            ],
            DrillCategory::Stance,
            Difficulty::Intermediate,
            "15 mins",
        ),
        drill(
            "med-ball-toss",
            "Med Ball Side Toss",
            "Develop explosive rotational power by tossing a medicine ball against a wall.",
            &[
                "Hold a 4-8lb med ball with both hands at your waist.",
                "Assume your hitting stance.",
                "Load back into your rear hip, then explosively rotate and throw the ball against a wall.",
                "Ensure your rear foot \"squishes the bug\" and hips clear completely.",
                "Perform 3 sets of 8 reps per side.",
            ],
            DrillCategory::Power,
            Difficulty::Intermediate,
            "15 mins",
        ),
        drill(
            "one-hand",
            "Top Hand Isolation",
            "Use a short bat to practice keeping your top hand tight to your body during the turn.",
            &[
                "Hold a short training bat (or grip your normal bat at the barrel) with only your top hand.",
                "Assume your stance and load.",
                "Focus on leading with your elbow and keeping the bat \"in the slot\" near your shoulder.",
                "Swing through contact focusing on a strong palm-up finish.",
                "Perform 10 controlled swings.",
            ],
            DrillCategory::Path,
            Difficulty::Advanced,
            "10 mins",
        ),
        drill(
            "balance-beam",
            "Balance Beam Hitting",
            "Improve balance and posture by hitting while standing on a 2x4 or balance beam.",
            &[
                "Place a 2x4 on the ground or use a balance beam.",
                "Take your stance on the beam, feet shoulder-width apart.",
                "Perform slow-motion swings first to get your balance.",
                "Progress to full swings focusing on staying on the beam throughout.",
                "Complete 15 successful swings without stepping off.",
            ],
            DrillCategory::Balance,
            Difficulty::Intermediate,
            "20 mins",
        ),
        drill(
            "knee-down-tee",
            "Knee Down Tee Work",
            "Forces proper upper body mechanics by eliminating lower body movement.",
            &[
                "Kneel on both knees with the tee positioned at waist height.",
                "Focus on rotating your upper body while keeping your lower body stable.",
                "Maintain a tall posture and avoid lunging at the ball.",
                "Drive your hands through the ball with a strong finish.",
                "Take 20 swings focusing on pure upper body rotation.",
            ],
            DrillCategory::Path,
            Difficulty::Beginner,
            "15 mins",
        ),
        drill(
            "stride-freeze",
            "Stride Freeze Drill",
            "Practice landing in a powerful, balanced position after your stride.",
            &[
                "Take your normal stance and begin your load.",
                "Stride forward and freeze in your landing position.",
                "Check that your weight is 50/50 and your head is centered.",
                "Hold the position for 3 seconds before completing the swing.",
                "Repeat 12 times focusing on a stable landing.",
            ],
            DrillCategory::Load,
            Difficulty::Beginner,
            "10 mins",
        ),
        drill(
            "closed-eyes",
            "Closed Eyes Swing",
            "Develop feel and muscle memory by swinging with eyes closed after load.",
            &[
                "Take your normal stance and load with eyes open.",
                "Close your eyes just before starting your swing.",
                "Focus on feeling your body movements and balance.",
                "Complete the swing based on muscle memory alone.",
                "Open your eyes and check your finish position. Repeat 10 times.",
            ],
            DrillCategory::Balance,
            Difficulty::Advanced,
            "15 mins",
        ),
        drill(
            "weighted-bat",
            "Weighted Bat Swings",
            "Build bat speed and strength using a slightly heavier training bat.",
            &[
                "Use a bat that is 2-4 ounces heavier than your game bat.",
                "Take 5 slow practice swings to get used to the weight.",
                "Perform 10 full-speed swings focusing on good mechanics.",
                "Switch back to your regular bat (it will feel lighter).",
                "Take 5 more swings with your game bat to reinforce speed.",
            ],
            DrillCategory::Power,
            Difficulty::Intermediate,
            "12 mins",
        ),
        drill(
            "two-ball-toss",
            "Two-Ball Color Recognition",
            "Improve pitch recognition and decision-making skills.",
            &[
                "Have a partner toss two balls of different colors.",
                "Partner calls out which color to hit mid-flight.",
                "Focus on tracking the correct ball and ignoring the other.",
                "Make contact only with the designated color ball.",
                "Complete 20 successful recognitions and hits.",
            ],
            DrillCategory::Stance,
            Difficulty::Advanced,
            "20 mins",
        ),
        drill(
            "back-hand",
            "Bottom Hand Only",
            "Strengthen your lead arm and improve bat control with bottom hand swings.",
            &[
                "Hold the bat with only your bottom hand (lead hand).",
                "Use a lighter bat or choke up for better control.",
                "Focus on a smooth, level swing path.",
                "Keep your elbow slightly bent but firm through contact.",
                "Perform 15 controlled swings per hand.",
            ],
            DrillCategory::Path,
            Difficulty::Intermediate,
            "12 mins",
        ),
        drill(
            "quick-hands",
            "Quick Hands Drill",
            "Develop bat speed and quick hands through rapid short swings.",
            &[
                "Stand closer to the tee than normal (reduced distance).",
                "Focus on minimal load and explosive hand action.",
                "Take short, compact swings with maximum hand speed.",
                "Don't try to kill the ball - focus on quickness.",
                "Perform 3 sets of 8 rapid-fire swings.",
            ],
            DrillCategory::Power,
            Difficulty::Intermediate,
            "10 mins",
        ),
        drill(
            "towel-drill",
            "Towel Under Arm",
            "Keep your front elbow connected to your body for proper swing mechanics.",
            &[
                "Tuck a small towel under your front elbow.",
                "Take your stance and load normally.",
                "Swing without letting the towel fall until after contact.",
                "Focus on keeping your elbow connected to your body.",
                "Complete 15 successful swings with the towel in place.",
            ],
            DrillCategory::Path,
            Difficulty::Beginner,
            "10 mins",
        ),
        drill(
            "mirror-work",
            "Mirror Swing Analysis",
            "Use a mirror for real-time visual feedback on your mechanics.",
            &[
                "Set up a mirror where you can see your full swing.",
                "Perform 5 slow-motion swings watching your posture.",
                "Check that your spine angle stays consistent.",
                "Verify your hands stay inside the ball path.",
                "Take 10 full-speed swings while monitoring key positions.",
            ],
            DrillCategory::Stance,
            Difficulty::Beginner,
            "15 mins",
        ),
        drill(
            "band-resistance",
            "Resistance Band Swings",
            "Add resistance to build strength and improve swing path.",
            &[
                "Attach a resistance band to a sturdy object at chest height.",
                "Hold the band handle like you would hold a bat.",
                "Perform slow swings against the resistance.",
                "Focus on maintaining proper mechanics despite the resistance.",
                "Complete 3 sets of 12 swings per direction.",
            ],
            DrillCategory::Power,
            Difficulty::Intermediate,
            "15 mins",
        ),
        drill(
            "timing-drill",
            "Variable Timing Drill",
            "Improve your ability to adjust to different pitch speeds.",
            &[
                "Have a partner vary the timing of their tosses.",
                "Some tosses should be quick, others with a pause.",
                "Focus on loading and timing based on the pitcher's motion.",
                "Don't commit to your swing until you recognize the release.",
                "Complete 20 varied timing attempts.",
            ],
            DrillCategory::Load,
            Difficulty::Advanced,
            "20 mins",
        ),
        drill(
            "follow-through",
            "Perfect Follow-Through",
            "Focus specifically on finishing your swing with proper extension and balance.",
            &[
                "Take normal swings but exaggerate your follow-through.",
                "Focus on full extension past the contact point.",
                "Ensure your back shoulder finishes lower than your front.",
                "Hold your finish position for 2 seconds after each swing.",
                "Complete 15 swings focusing on the finish.",
            ],
            DrillCategory::Path,
            Difficulty::Beginner,
            "10 mins",
        ),
        drill(
            "chair-drill",
            "Seat Belt Chair Drill",
            "Prevent lunging by keeping your back against a chair during swing.",
            &[
                "Place a chair directly behind your rear hip.",
                "Take your stance with your back lightly touching the chair.",
                "Swing without losing contact with the chair until after contact.",
                "This prevents you from lunging forward at the ball.",
                "Complete 20 swings staying connected to the chair.",
            ],
            DrillCategory::Stance,
            Difficulty::Intermediate,
            "15 mins",
        ),
    ]
}
