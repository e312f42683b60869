use std::collections::BTreeSet;

use super::*;

fn options(values: &[u32]) -> BTreeSet<u32> {
    values.iter().copied().collect()
}

#[test]
fn test_shugo_options_map_to_derived_minutes() {
    let def = definition(ContentId::ShugoFesta).unwrap();
    assert_eq!(def.kind, MatchKind::EveryHour);

    let points = def.expand(&options(&[15, 45]));
    let minutes: Vec<u32> = points.iter().map(|p| p.minute).collect();
    assert_eq!(minutes, vec![18, 48]);
}

#[test]
fn test_rift_options_are_firing_hours() {
    let def = definition(ContentId::Rift).unwrap();
    assert_eq!(def.kind, MatchKind::FixedHours);

    let points = def.expand(&options(&[2, 14]));
    assert_eq!(
        points,
        vec![
            FiringPoint { hour: 2, minute: 0 },
            FiringPoint {
                hour: 14,
                minute: 0
            },
        ]
    );
}

#[test]
fn test_expansion_is_pure() {
    let def = definition(ContentId::ShugoFesta).unwrap();
    let opts = options(&[45]);
    assert_eq!(def.expand(&opts), def.expand(&opts));
    assert_eq!(def.expand(&opts), def.expand(&opts));
}

#[test]
fn test_empty_options_expand_to_nothing() {
    for def in CONTENT_LIST {
        assert!(def.expand(&BTreeSet::new()).is_empty());
    }
}

#[test]
fn test_every_content_has_choices() {
    for def in CONTENT_LIST {
        assert!(!def.choices.is_empty());
        assert!(definition(def.id).is_some());
    }
}

#[test]
fn test_messages_name_the_content() {
    let shugo = definition(ContentId::ShugoFesta).unwrap();
    assert_eq!(
        shugo.main_message(9, 18),
        "09:18 Shugo Festa match is starting!"
    );
    assert_eq!(shugo.advance_message(3), "Shugo Festa in 3 min");

    let rift = definition(ContentId::Rift).unwrap();
    assert_eq!(
        rift.main_message(2, 0),
        "The Rift of Space-Time has opened (02:00)!"
    );
    assert_eq!(rift.advance_message(5), "Rift of Space-Time in 5 min");
}
