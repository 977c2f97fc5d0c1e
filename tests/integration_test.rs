use rdbgview::{
    Breakpoint, CellBox, CellStyle, ColumnResizeController, DebugSession, DemoSessionReader,
    Frame, JsonSessionReader, PanelCollapseController, Scope, SessionReader, SessionWriter,
    Source, SplitContainer, TableLayout, Variable, COLLAPSED_RELATIVE_SIZE,
    EXPANDED_RELATIVE_SIZE, parse_session,
};
use anyhow::Result;
use std::env;
use std::fs;

fn split_with_panels(titles: &[&str]) -> (SplitContainer, Vec<PanelCollapseController>) {
    let mut container = SplitContainer::new();
    let controllers = titles
        .iter()
        .map(|title| PanelCollapseController::new(container.add_panel(*title)))
        .collect();
    (container, controllers)
}

fn sample_session() -> DebugSession {
    DebugSession {
        name: "integration".to_string(),
        breakpoints: vec![
            Breakpoint { source: "app.py".to_string(), line: 7, verified: true },
            Breakpoint { source: "app.py".to_string(), line: 2, verified: false },
        ],
        frames: vec![Frame {
            id: 1,
            name: "main".to_string(),
            source: Some("app.py".to_string()),
            line: 7,
        }],
        scopes: vec![Scope {
            name: "Locals".to_string(),
            variables: vec![Variable {
                name: "items".to_string(),
                type_name: "list".to_string(),
                value: "[1, 2]".to_string(),
                evaluate_name: "items".to_string(),
                variables_reference: 3,
                children: vec![Variable {
                    name: "0".to_string(),
                    type_name: "int".to_string(),
                    value: "1".to_string(),
                    evaluate_name: "items[0]".to_string(),
                    variables_reference: 0,
                    children: Vec::new(),
                }],
            }],
        }],
        sources: vec![Source {
            path: "app.py".to_string(),
            content: "import sys\n\ndef main():\n    pass\n".to_string(),
        }],
    }
}

// ===== Panel collapse =====

#[test]
fn test_two_tier_collapse_scenario() {
    let (mut container, mut controllers) = split_with_panels(&["A", "B", "C"]);
    assert!(container.set_relative_sizes(&[0.33, 0.33, 0.33]));

    // Collapse B: two-tier sizes, not proportional.
    assert!(controllers[1].toggle(&mut container));
    assert_eq!(
        container.raw_sizes(),
        vec![EXPANDED_RELATIVE_SIZE, COLLAPSED_RELATIVE_SIZE, EXPANDED_RELATIVE_SIZE]
    );

    // Collapse A: C stays visible.
    assert!(controllers[0].toggle(&mut container));
    assert_eq!(
        container.raw_sizes(),
        vec![COLLAPSED_RELATIVE_SIZE, COLLAPSED_RELATIVE_SIZE, EXPANDED_RELATIVE_SIZE]
    );

    // Collapsing C would leave nothing visible.
    let before = container.raw_sizes();
    assert!(!controllers[2].toggle(&mut container));
    assert_eq!(container.raw_sizes(), before);
    assert_eq!(container.visible_count(), 1);
    assert!(!controllers[2].is_collapsed());
}

#[test]
fn test_collapsed_flag_follows_toggle_parity() {
    let (mut container, mut controllers) = split_with_panels(&["A", "B"]);
    for n in 1..=7 {
        assert!(controllers[0].toggle(&mut container));
        assert_eq!(controllers[0].is_collapsed(), n % 2 == 1);
        assert_eq!(container.panels()[0].is_collapsed(), n % 2 == 1);
    }
}

#[test]
fn test_collapse_then_expand_restores_visibility() {
    let (mut container, mut controllers) = split_with_panels(&["A", "B", "C"]);
    let before: Vec<(bool, bool)> = container
        .panels()
        .iter()
        .map(|p| (p.is_content_visible(), p.is_handle_hidden()))
        .collect();

    controllers[1].toggle(&mut container);
    assert!(!container.panels()[1].is_content_visible());
    assert!(container.panels()[1].is_handle_hidden());

    controllers[1].toggle(&mut container);
    let after: Vec<(bool, bool)> = container
        .panels()
        .iter()
        .map(|p| (p.is_content_visible(), p.is_handle_hidden()))
        .collect();
    assert_eq!(before, after);

    let total: f32 = container.relative_sizes().iter().sum();
    assert!((total - 1.0).abs() < 1e-5);
}

// ===== Column resize =====

fn three_column_table(rows: usize) -> TableLayout {
    let style = CellStyle::content_box(4.0, 4.0);
    let mut table = TableLayout::new(vec![
        CellBox::with_style(100.0, style),
        CellBox::with_style(80.0, style),
        CellBox::with_style(200.0, style),
    ]);
    table.sync_rows(rows);
    table
}

#[test]
fn test_drag_first_column_moves_neighbour() {
    let mut table = three_column_table(4);
    let mut resizer = ColumnResizeController::new();

    assert!(resizer.on_drag_start(150.0, 0, &table));
    assert!(resizer.on_drag_move(175.0, &mut table));
    resizer.on_drag_end();

    let mut all_rows = vec![table.header().to_vec()];
    all_rows.extend(table.rows().iter().cloned());
    for row in all_rows {
        assert_eq!(row[0].width(), 125.0);
        assert_eq!(row[1].width(), 55.0);
        assert_eq!(row[2].width(), 200.0);
    }
    assert!(table.is_aligned());
}

#[test]
fn test_drag_last_column_has_no_compensation() {
    let mut table = three_column_table(2);
    let mut resizer = ColumnResizeController::new();

    assert!(resizer.on_drag_start(400.0, 2, &table));
    assert!(resizer.on_drag_move(430.0, &mut table));
    resizer.on_drag_end();

    assert_eq!(table.column_width(0), Some(100.0));
    assert_eq!(table.column_width(1), Some(80.0));
    assert_eq!(table.column_width(2), Some(230.0));
    assert!(table.rows().iter().all(|row| row[2].width() == 230.0));
}

#[test]
fn test_moves_after_release_are_ignored() {
    let mut table = three_column_table(1);
    let mut resizer = ColumnResizeController::new();

    resizer.on_drag_start(0.0, 1, &table);
    resizer.on_drag_move(10.0, &mut table);
    assert!(resizer.release_if_idle(false));
    assert!(!resizer.on_drag_move(50.0, &mut table));

    assert_eq!(table.column_width(1), Some(90.0));
    assert_eq!(table.column_width(2), Some(190.0));
}

// ===== Session files =====

#[test]
fn test_write_and_read_session() -> Result<()> {
    let test_file = env::temp_dir().join("rdbgview_test_session.json");
    let test_file = test_file.to_string_lossy().into_owned();
    let _ = fs::remove_file(&test_file);

    let session = sample_session();
    {
        let mut writer = SessionWriter::new(&test_file)?;
        writer.write_session(&session)?;
        writer.finish()?;
    }

    let loaded = JsonSessionReader::new().read(&test_file)?;
    assert_eq!(loaded, session);
    assert_eq!(loaded.variable_count(), 1);
    assert_eq!(loaded.scopes[0].variables[0].children.len(), 1);

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_brotli_write_and_read() -> Result<()> {
    let test_file = env::temp_dir().join("rdbgview_test_session.json.br");
    let test_file = test_file.to_string_lossy().into_owned();
    let _ = fs::remove_file(&test_file);

    let session = DemoSessionReader::new().generate();
    {
        let mut writer = SessionWriter::new(&test_file)?;
        writer.write_session(&session)?;
        writer.finish()?;
    }

    // Compressed data must not parse as plain JSON.
    let raw = fs::read(&test_file)?;
    assert!(serde_json::from_slice::<DebugSession>(&raw).is_err());

    let loaded = parse_session(&test_file)?;
    assert_eq!(loaded, session);

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_session_json_uses_type_key() -> Result<()> {
    let json = r#"{
        "name": "minimal",
        "scopes": [{ "name": "Locals", "variables": [
            { "name": "x", "type": "int", "value": "3" }
        ]}]
    }"#;
    let session: DebugSession = serde_json::from_str(json)?;
    assert_eq!(session.scopes[0].variables[0].type_name, "int");
    assert!(session.breakpoints.is_empty());
    assert!(session.frames.is_empty());
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let err = parse_session("/nonexistent/session.json").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/session.json"));
}

#[test]
fn test_trait_polymorphism() -> Result<()> {
    let readers: Vec<Box<dyn SessionReader>> = vec![
        Box::new(DemoSessionReader::new()),
        Box::new(DemoSessionReader::with_seed(7)),
    ];
    for reader in readers {
        let session = reader.read("")?;
        assert!(!session.frames.is_empty());
        assert!(!reader.source_name().is_empty());
    }
    Ok(())
}
