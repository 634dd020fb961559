use gridpak::{
    Breakpoint, BreakpointBuilder, BreakpointSet, BreakpointSetError, GridParams, GridSession,
    InvalidParameter, RawParams, ResizeOutcome, Unit,
};

fn bp(min_width: u32) -> Breakpoint {
    BreakpointBuilder::default()
        .min_width(min_width)
        .build()
        .unwrap()
}

fn assert_bounds(set: &BreakpointSet) {
    let members: Vec<&Breakpoint> = set.iter().collect();
    let n = members.len();
    for (i, member) in members.iter().enumerate() {
        let expected_lower = if i == 0 { 0 } else { member.min_width() };
        let expected_upper = members.get(i + 1).map(|next| next.min_width());
        assert_eq!(member.lower_bound(), expected_lower, "lower bound of {}", i);
        assert_eq!(member.upper_bound(), expected_upper, "upper bound of {}", i);
        assert_eq!(member.position(), i);
    }
    if n > 0 {
        assert_eq!(members[n - 1].upper_bound(), None);
    }
}

#[test]
fn test_column_count_limit() {
    for column_count in 1..=99 {
        let params = GridParams {
            column_count,
            ..Default::default()
        };
        assert!(Breakpoint::new(params).is_ok());
    }
    for column_count in [100, 101, 500, u32::MAX] {
        let params = GridParams {
            column_count,
            ..Default::default()
        };
        assert_eq!(
            Breakpoint::new(params),
            Err(InvalidParameter::TooManyColumns(column_count))
        );
    }
}

#[test]
fn test_bounds_hold_for_any_insertion_order() {
    let widths = [960, 100, 500, 1440, 0, 768, 320];
    let mut set = BreakpointSet::new();
    for width in widths {
        set.add(bp(width)).unwrap();
        assert_bounds(&set);
    }
    let sorted: Vec<u32> = set.iter().map(|b| b.min_width()).collect();
    assert_eq!(sorted, vec![0, 100, 320, 500, 768, 960, 1440]);

    let snapshot = set.clone();
    set.recompute_bounds();
    set.recompute_bounds();
    assert_eq!(set, snapshot);

    while !set.is_empty() {
        set.remove(set.len() / 2).unwrap();
        assert_bounds(&set);
    }
}

#[test]
fn test_golden_column_widths() {
    let mut wide = BreakpointBuilder::default()
        .min_width(960)
        .column_count(16)
        .column_padding(10, Unit::Pixels)
        .gutter(8, Unit::Pixels)
        .build()
        .unwrap();
    assert_eq!(wide.update_column_width(960), 32);

    let mut percent = BreakpointBuilder::default()
        .min_width(500)
        .column_count(8)
        .column_padding(0, Unit::Pixels)
        .gutter(10, Unit::Percent)
        .build()
        .unwrap();
    assert_eq!(percent.update_column_width(500), 18);
}

#[test]
fn test_select_current_steps_to_neighbors() {
    let mut set = BreakpointSet::from_breakpoints([bp(0), bp(100), bp(960)]).unwrap();
    set.set_current(1).unwrap();
    assert_eq!(set.select_current(50).unwrap().position(), 0);
    set.set_current(1).unwrap();
    assert_eq!(set.select_current(961).unwrap().position(), 2);
}

#[test]
fn test_duplicate_min_width() {
    let mut set = BreakpointSet::with_default_seed().unwrap();
    assert_eq!(set.add(bp(100)), Err(BreakpointSetError::DuplicateKey(100)));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_session_drag_and_edit() {
    let mut session = GridSession::new(BreakpointSet::with_default_seed().unwrap(), 1000);
    assert_eq!(session.current().unwrap().min_width(), 960);

    match session.resize(610) {
        ResizeOutcome::Switched { to, width, .. } => {
            assert_eq!(to, 1);
            assert_eq!(width, 620);
        }
        other => panic!("expected a switch, got {:?}", other),
    }

    let raw = RawParams {
        min_width: Some("640".to_string()),
        ..Default::default()
    };
    session.create_grid(&raw).unwrap();
    assert_eq!(session.current().unwrap().min_width(), 640);
    assert_bounds(session.grids());

    let json = session.grids().to_json(false).unwrap();
    let reloaded = BreakpointSet::from_json(json.as_bytes()).unwrap();
    assert_eq!(&reloaded, session.grids());
}
