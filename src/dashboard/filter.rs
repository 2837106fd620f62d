//! Category, fee-type and name search predicates over the working list.

use crate::components::event_feed::EventRecord;

/// Fee classification selectable in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeType {
    Free,
    Paid,
}

impl FeeType {
    pub fn matches(self, event: &EventRecord) -> bool {
        match self {
            FeeType::Free => event.is_free,
            FeeType::Paid => !event.is_free,
        }
    }

    /// All → Free → Paid → All
    pub fn cycle(current: Option<FeeType>) -> Option<FeeType> {
        match current {
            None => Some(FeeType::Free),
            Some(FeeType::Free) => Some(FeeType::Paid),
            Some(FeeType::Paid) => None,
        }
    }
}

/// Active filter criteria, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub fee: Option<FeeType>,
    pub search: String,
}

impl EventFilter {
    pub fn matches(&self, event: &EventRecord) -> bool {
        self.matches_category(event) && self.matches_fee(event) && self.matches_search(event)
    }

    fn matches_category(&self, event: &EventRecord) -> bool {
        match &self.category {
            Some(category) => event.category == *category,
            None => true,
        }
    }

    fn matches_fee(&self, event: &EventRecord) -> bool {
        self.fee.map_or(true, |fee| fee.matches(event))
    }

    fn matches_search(&self, event: &EventRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        event
            .event_name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    /// Matching events in working-list order
    pub fn apply<'a>(&self, events: &'a [EventRecord]) -> Vec<&'a EventRecord> {
        events.iter().filter(|event| self.matches(event)).collect()
    }

    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.fee.is_some() || !self.search.is_empty()
    }
}

/// Distinct categories in first-seen order
pub fn categories(events: &[EventRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for event in events {
        if !event.category.is_empty() && !seen.contains(&event.category) {
            seen.push(event.category.clone());
        }
    }
    seen
}

/// Next category option after `current`, wrapping back to "all"
pub fn cycle_category(options: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(current) => {
            let position = options.iter().position(|option| option == current);
            match position {
                Some(index) => options.get(index + 1).cloned(),
                // Selected category vanished after a refresh
                None => options.first().cloned(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(category: &str, name: &str, is_free: bool) -> EventRecord {
        EventRecord {
            category: category.to_string(),
            event_name: name.to_string(),
            is_free,
            event_fee: if is_free { None } else { Some("1000원".to_string()) },
            ..Default::default()
        }
    }

    fn sample() -> Vec<EventRecord> {
        vec![
            event("연극", "Hamlet in Seoul", false),
            event("국악", "정오의 음악회", true),
            event("연극", "The Seagull", true),
            event("전시/미술", "Modern Hamlet Prints", false),
            event("국악", "Gayageum Night", false),
        ]
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let events = sample();
        let filter = EventFilter::default();
        assert_eq!(filter.apply(&events).len(), events.len());
        assert!(!filter.is_active());
    }

    #[test]
    fn test_category_exact_match() {
        let events = sample();
        let filter = EventFilter {
            category: Some("연극".to_string()),
            ..Default::default()
        };
        let names: Vec<&str> = filter.apply(&events).iter().map(|e| e.event_name.as_str()).collect();
        assert_eq!(names, vec!["Hamlet in Seoul", "The Seagull"]);

        let prefix_only = EventFilter {
            category: Some("연".to_string()),
            ..Default::default()
        };
        assert!(prefix_only.apply(&events).is_empty());
    }

    #[test]
    fn test_fee_type() {
        let events = sample();
        let free = EventFilter { fee: Some(FeeType::Free), ..Default::default() };
        let paid = EventFilter { fee: Some(FeeType::Paid), ..Default::default() };
        assert!(free.apply(&events).iter().all(|e| e.is_free));
        assert!(paid.apply(&events).iter().all(|e| !e.is_free));
        assert_eq!(free.apply(&events).len() + paid.apply(&events).len(), events.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let events = sample();
        let filter = EventFilter { search: "hAmLeT".to_string(), ..Default::default() };
        let names: Vec<&str> = filter.apply(&events).iter().map(|e| e.event_name.as_str()).collect();
        assert_eq!(names, vec!["Hamlet in Seoul", "Modern Hamlet Prints"]);

        let korean = EventFilter { search: "음악".to_string(), ..Default::default() };
        assert_eq!(korean.apply(&events).len(), 1);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let events = sample();
        let filter = EventFilter {
            category: Some("연극".to_string()),
            fee: Some(FeeType::Paid),
            search: "hamlet".to_string(),
        };
        let matched = filter.apply(&events);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].event_name, "Hamlet in Seoul");
    }

    #[test]
    fn test_filtered_set_is_ordered_subset() {
        let events = sample();
        let filters = [
            EventFilter::default(),
            EventFilter { fee: Some(FeeType::Free), ..Default::default() },
            EventFilter { category: Some("국악".to_string()), ..Default::default() },
            EventFilter { search: "e".to_string(), fee: Some(FeeType::Paid), ..Default::default() },
        ];

        for filter in filters {
            let matched = filter.apply(&events);
            let mut cursor = 0;
            for item in &matched {
                assert!(filter.matches(item));
                // Every match appears in the working list after the previous one
                let index = events[cursor..]
                    .iter()
                    .position(|e| std::ptr::eq(e, *item))
                    .expect("filtered item must come from the working list");
                cursor += index + 1;
            }
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let events = sample();
        assert_eq!(categories(&events), vec!["연극", "국악", "전시/미술"]);
    }

    #[test]
    fn test_cycle_category() {
        let options = vec!["연극".to_string(), "국악".to_string()];
        assert_eq!(cycle_category(&options, None), Some("연극".to_string()));
        assert_eq!(cycle_category(&options, Some("연극")), Some("국악".to_string()));
        assert_eq!(cycle_category(&options, Some("국악")), None);
        assert_eq!(cycle_category(&options, Some("무용")), Some("연극".to_string()));
        assert_eq!(cycle_category(&[], None), None);
    }

    #[test]
    fn test_cycle_fee() {
        assert_eq!(FeeType::cycle(None), Some(FeeType::Free));
        assert_eq!(FeeType::cycle(Some(FeeType::Free)), Some(FeeType::Paid));
        assert_eq!(FeeType::cycle(Some(FeeType::Paid)), None);
    }
}
