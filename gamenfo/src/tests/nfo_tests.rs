use super::*;
use chrono::{FixedOffset, TimeZone, Utc};

fn fixed_created() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .unwrap()
        .fixed_offset()
}

#[test]
fn test_format_rating() {
    assert_eq!(format_rating(4.5), "4.5");
    assert_eq!(format_rating(0.0), "0");
    assert_eq!(format_rating(10.0), "10");
    assert_eq!(format_rating(100000.0), "100000");
    assert_eq!(format_rating(0.0001), "0.0001");
}

#[test]
fn test_format_rating_switches_to_exponent() {
    assert_eq!(format_rating(1e300), "1e+300");
    assert_eq!(format_rating(1e-7), "1e-07");
    assert_eq!(format_rating(1_500_000.0), "1.5e+06");
    assert_eq!(format_rating(-2.5e-5), "-2.5e-05");
    assert_eq!(format_rating(1e300).parse::<f64>().unwrap(), 1e300);
}

#[test]
fn test_escape_text_keeps_carriage_returns() {
    assert_eq!(escape_text("a\r\nb\tc"), "a&#xD;\nb\tc");
    assert_eq!(escape_text("Tom & Jerry"), "Tom &amp; Jerry");
}

#[test]
fn test_escape_attribute_references_whitespace() {
    assert_eq!(escape_attribute("U\tS\n\r"), "U&#x9;S&#xA;&#xD;");
    assert_eq!(escape_attribute("a\"b"), "a&quot;b");
}

#[test]
fn test_control_whitespace_written_as_references() {
    let game = Game {
        plot: vec![LangText::with_lang("e\tn", "one\r\ntwo")],
        ..Default::default()
    };

    let nfo = render(&game).unwrap();
    assert!(!nfo.contains('\r'));
    assert!(nfo.contains("<plot lang=\"e&#x9;n\">one&#xD;\ntwo</plot>"));
}

#[test]
fn test_format_timestamp() {
    assert_eq!(format_timestamp(&fixed_created()), "2024-03-01T12:00:00Z");

    let tokyo = FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(1998, 11, 21, 0, 0, 0)
        .unwrap();
    assert_eq!(format_timestamp(&tokyo), "1998-11-21T00:00:00+09:00");
}

#[test]
fn test_is_xml_char() {
    assert!(is_xml_char('a'));
    assert!(is_xml_char('\t'));
    assert!(is_xml_char('\n'));
    assert!(is_xml_char('ö'));
    assert!(!is_xml_char('\u{0}'));
    assert!(!is_xml_char('\u{1B}'));
    assert!(!is_xml_char('\u{FFFF}'));
}

#[test]
fn test_minimal_document_layout() {
    let game = Game {
        title: vec![LangText::with_lang("en", "Demo")],
        rating: 4.5,
        created_at: fixed_created(),
        ..Default::default()
    };

    let nfo = render(&game).unwrap();
    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
        "<game>\n",
        "\t<title lang=\"en\">Demo</title>\n",
        "\t<rating>4.5</rating>\n",
        "\t<created>2024-03-01T12:00:00Z</created>\n",
        "\t<updated>1970-01-01T00:00:00Z</updated>\n",
        "</game>",
    );
    assert_eq!(nfo, expected);
}

#[test]
fn test_nested_elements_indent_one_tab_per_level() {
    let game = Game {
        release: vec![Platform::new("PC").release("DE", fixed_created())],
        ..Default::default()
    };

    let nfo = render(&game).unwrap();
    assert!(nfo.contains("\n\t<release>\n\t\t<platform>PC</platform>\n"));
    assert!(nfo.contains("\n\t\t<releases country=\"DE\">2024-03-01T12:00:00Z</releases>\n\t</release>\n"));
}

#[test]
fn test_empty_creator_info_is_self_closed() {
    let game = Game {
        creator_info: Some(CreatorInfo::default()),
        ..Default::default()
    };

    let nfo = render(&game).unwrap();
    assert!(nfo.contains("\n\t<creatorinfo/>\n"));
}

#[test]
fn test_streaming_only_renders_one_flag() {
    let game = Game {
        creator_info: Some(CreatorInfo {
            streaming_allowed: true,
            ..Default::default()
        }),
        ..Default::default()
    };

    let nfo = render(&game).unwrap();
    assert!(nfo.contains("<creatorinfo>\n\t\t<stream>true</stream>\n\t</creatorinfo>"));
    assert!(!nfo.contains("<vod>"));
    assert!(!nfo.contains("<musicusage>"));
    assert!(!nfo.contains("<monetisation>"));
    assert!(!nfo.contains("<additionalinfo>"));
}

#[test]
fn test_text_is_escaped() {
    let game = Game {
        title: vec![LangText::new("Tom & Jerry <Deluxe>")],
        ..Default::default()
    };

    let nfo = render(&game).unwrap();
    assert!(nfo.contains("<title>Tom &amp; Jerry &lt;Deluxe&gt;</title>"));
}

#[test]
fn test_control_character_is_rejected() {
    let game = Game {
        genre: vec!["Action\u{7}".to_string()],
        ..Default::default()
    };

    match render(&game) {
        Err(EncodingError::InvalidChar { element, ch }) => {
            assert_eq!(element, "genre");
            assert_eq!(ch, '\u{7}');
        }
        other => panic!("expected InvalidChar, got {other:?}"),
    }
}

#[test]
fn test_control_character_in_attribute_is_rejected() {
    let game = Game {
        plot: vec![LangText::with_lang("e\u{0}n", "Plot")],
        ..Default::default()
    };

    assert!(matches!(
        render(&game),
        Err(EncodingError::InvalidChar { .. })
    ));
}

#[test]
fn test_non_finite_rating_is_rejected() {
    for rating in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let game = Game {
            rating,
            ..Default::default()
        };
        assert!(matches!(
            render(&game),
            Err(EncodingError::NonFiniteRating(_))
        ));
    }
}

#[test]
fn test_nfo_format_trait() {
    let format = NfoFormat::new();
    assert_eq!(format.name(), "nfo");
    assert_eq!(format.file_extension(), "nfo");

    let game = Game::new();
    assert_eq!(format.render(&game).unwrap(), game.to_nfo().unwrap());
}
