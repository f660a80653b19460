const STATE_AREA_CODES: [(&str, &str); 27] = [
    ("AC", "68"),
    ("AL", "82"),
    ("AP", "96"),
    ("AM", "92"),
    ("BA", "71"),
    ("CE", "85"),
    ("DF", "61"),
    ("ES", "27"),
    ("GO", "62"),
    ("MA", "98"),
    ("MT", "65"),
    ("MS", "67"),
    ("MG", "31"),
    ("PA", "91"),
    ("PB", "83"),
    ("PR", "41"),
    ("PE", "81"),
    ("PI", "86"),
    ("RJ", "21"),
    ("RN", "84"),
    ("RS", "51"),
    ("RO", "69"),
    ("RR", "95"),
    ("SC", "48"),
    ("SP", "11"),
    ("SE", "79"),
    ("TO", "63"),
];

/// Area code (DDD) of the capital of a federative unit, used when a record
/// carries a bare subscriber number and only its address tells us where it is.
pub fn area_code_for_state(state: &str) -> Option<&'static str> {
    let trimmed = state.trim();
    if trimmed.len() != 2 {
        return None;
    }
    let upper = trimmed.to_ascii_uppercase();
    STATE_AREA_CODES
        .iter()
        .find(|(uf, _)| *uf == upper)
        .map(|(_, ddd)| *ddd)
}

#[cfg(test)]
mod tests {
    use super::{area_code_for_state, STATE_AREA_CODES};

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(area_code_for_state("sp"), Some("11"));
        assert_eq!(area_code_for_state(" Rj "), Some("21"));
        assert_eq!(area_code_for_state("DF"), Some("61"));
    }

    #[test]
    fn unknown_states_yield_nothing() {
        assert_eq!(area_code_for_state(""), None);
        assert_eq!(area_code_for_state("XX"), None);
        assert_eq!(area_code_for_state("São Paulo"), None);
    }

    #[test]
    fn table_covers_every_federative_unit_once() {
        let mut states: Vec<&str> = STATE_AREA_CODES.iter().map(|(uf, _)| *uf).collect();
        states.sort_unstable();
        states.dedup();
        assert_eq!(states.len(), 27);
        assert!(STATE_AREA_CODES
            .iter()
            .all(|(_, ddd)| ddd.len() == 2 && ddd.chars().all(|ch| ch.is_ascii_digit())));
    }
}
