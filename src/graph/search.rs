//! Graph search and scoring
//!
//! Case-insensitive substring scoring over four fields with fixed
//! weights: name matches outrank entity-type matches, which outrank
//! per-observation matches, which outrank per-relation matches. Every
//! matching observation and relation contributes additively. This is a
//! linear scan over the whole graph; at single-session scale no index
//! is warranted.

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;

use crate::types::{Entity, KnowledgeGraph, FILE_ENTITY_TYPE};
use crate::utils::parse_iso;

use super::GraphStore;

/// Threshold for using parallel scoring (entity count)
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

/// Observation prefix carrying a file-access timestamp
pub const ACCESSED_AT_PREFIX: &str = "Accessed at: ";

const NAME_WEIGHT: u32 = 10;
const TYPE_WEIGHT: u32 = 5;
const OBSERVATION_WEIGHT: u32 = 2;
const RELATION_WEIGHT: u32 = 1;

/// Score one entity against a lowercased query
fn score_entity(entity: &Entity, query: &str) -> u32 {
    let mut score = 0;

    if entity.name.to_lowercase().contains(query) {
        score += NAME_WEIGHT;
    }
    if entity.entity_type.to_lowercase().contains(query) {
        score += TYPE_WEIGHT;
    }
    for observation in &entity.observations {
        if observation.to_lowercase().contains(query) {
            score += OBSERVATION_WEIGHT;
        }
    }
    for relation in &entity.relations {
        if relation.relation_type.to_lowercase().contains(query)
            || relation.to.to_lowercase().contains(query)
        {
            score += RELATION_WEIGHT;
        }
    }

    score
}

/// Rank entities matching the scored candidates, descending by score.
///
/// The sort is stable, so ties keep insertion order.
fn rank(mut scored: Vec<(u32, Entity)>) -> Vec<Entity> {
    scored.retain(|(score, _)| *score > 0);
    scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
    scored.into_iter().map(|(_, entity)| entity).collect()
}

/// Search the whole graph, returning matches ranked by score
pub fn search_nodes(store: &GraphStore, query: &str) -> Vec<Entity> {
    let graph = store.snapshot();
    search_graph(&graph, query, None)
}

/// Search a graph snapshot, optionally restricted to one entity type
pub fn search_graph(
    graph: &KnowledgeGraph,
    query: &str,
    entity_type: Option<&str>,
) -> Vec<Entity> {
    let query = query.to_lowercase();

    let candidates: Vec<&Entity> = graph
        .entities
        .iter()
        .filter(|e| entity_type.map_or(true, |t| e.entity_type == t))
        .collect();

    let scored: Vec<(u32, Entity)> = if candidates.len() > PARALLEL_SEARCH_THRESHOLD {
        candidates
            .par_iter()
            .map(|e| (score_entity(e, &query), (*e).clone()))
            .collect()
    } else {
        candidates
            .iter()
            .map(|e| (score_entity(e, &query), (*e).clone()))
            .collect()
    };

    rank(scored)
}

/// Files with an `Accessed at:` observation inside the last 24 hours,
/// most recent first.
///
/// Re-scans every file entity's observation strings on each call. This
/// is O(n) per file access and an accepted scaling limit of the
/// design.
pub fn recently_accessed_files(
    graph: &KnowledgeGraph,
    now: DateTime<Utc>,
) -> Vec<(String, DateTime<Utc>)> {
    let cutoff = now - Duration::hours(24);

    let mut recent: Vec<(String, DateTime<Utc>)> = graph
        .entities
        .iter()
        .filter(|e| e.entity_type == FILE_ENTITY_TYPE)
        .filter_map(|e| {
            let latest = e
                .observations
                .iter()
                .filter_map(|o| o.strip_prefix(ACCESSED_AT_PREFIX))
                .filter_map(parse_iso)
                .max()?;
            (latest >= cutoff).then(|| (e.name.clone(), latest))
        })
        .collect();

    // Stable sort keeps insertion order for equal timestamps
    recent.sort_by_key(|(_, ts)| std::cmp::Reverse(*ts));
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Relation;

    fn entity_with(name: &str, entity_type: &str, observations: &[&str]) -> Entity {
        let mut e = Entity::new(name, entity_type);
        e.observations = observations.iter().map(|s| s.to_string()).collect();
        e
    }

    #[test]
    fn test_name_match_outranks_observation_match() {
        let by_name = entity_with("config", "concept", &[]);
        let by_obs = entity_with("other", "concept", &["mentions config here"]);

        assert!(score_entity(&by_name, "config") > score_entity(&by_obs, "config"));
    }

    #[test]
    fn test_observation_matches_are_additive() {
        let one = entity_with("a", "concept", &["rust code"]);
        let two = entity_with("b", "concept", &["rust code", "more rust"]);

        assert!(score_entity(&two, "rust") > score_entity(&one, "rust"));
    }

    #[test]
    fn test_relation_match_scores_lowest() {
        let mut by_rel = entity_with("a", "concept", &[]);
        by_rel.relations.push(Relation::new("a", "b", "likes_rust"));

        let by_obs = entity_with("c", "concept", &["rust"]);

        let rel_score = score_entity(&by_rel, "rust");
        assert!(rel_score > 0);
        assert!(score_entity(&by_obs, "rust") > rel_score);
    }

    #[test]
    fn test_zero_score_excluded_and_ties_keep_insertion_order() {
        let graph = KnowledgeGraph {
            entities: vec![
                entity_with("zeta", "note", &["apple pie"]),
                entity_with("alpha", "note", &["apple tart"]),
                entity_with("nomatch", "note", &[]),
            ],
        };

        let results = search_graph(&graph, "apple", None);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "zeta");
        assert_eq!(results[1].name, "alpha");
    }

    #[test]
    fn test_recently_accessed_orders_and_filters() {
        let now = Utc::now();
        let recent_ts = (now - Duration::hours(1)).to_rfc3339();
        let older_ts = (now - Duration::hours(2)).to_rfc3339();
        let stale_ts = (now - Duration::hours(48)).to_rfc3339();

        let graph = KnowledgeGraph {
            entities: vec![
                {
                    let mut e = Entity::new("file:/a", FILE_ENTITY_TYPE);
                    e.observations = vec![format!("{ACCESSED_AT_PREFIX}{older_ts}")];
                    e
                },
                {
                    let mut e = Entity::new("file:/b", FILE_ENTITY_TYPE);
                    e.observations = vec![format!("{ACCESSED_AT_PREFIX}{recent_ts}")];
                    e
                },
                {
                    let mut e = Entity::new("file:/stale", FILE_ENTITY_TYPE);
                    e.observations = vec![format!("{ACCESSED_AT_PREFIX}{stale_ts}")];
                    e
                },
                Entity::new("not-a-file", "person"),
            ],
        };

        let recent = recently_accessed_files(&graph, now);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].0, "file:/b");
        assert_eq!(recent[1].0, "file:/a");
    }
}
