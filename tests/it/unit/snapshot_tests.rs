//! Snapshot tests using the insta crate.
//!
//! Snapshots are kept inline, next to the code that produces them. To update
//! them after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestBoardBuilder;
use symbolboard::{CompositeSymbol, Inspector, SymbolKind};

#[test]
fn snapshot_export_record_minimal() {
    let mut c = CompositeSymbol::new();
    c.assign(SymbolKind::Echelon, "Battalion");
    c.assign(SymbolKind::Role, "Infantry");

    insta::assert_json_snapshot!(c.export_record().unwrap(), @r###"
    {
      "affiliation": "Friendly",
      "echelon": "Battalion",
      "role": "Infantry",
      "status": null,
      "mobility": null,
      "capability": null,
      "unit_name": null
    }
    "###);
}

#[test]
fn snapshot_board_summaries() {
    let board = TestBoardBuilder::new()
        .with_image("Infantry", (320, 200), (100.5, 50.25))
        .with_text((250.5, 80.75))
        .build();

    insta::assert_json_snapshot!(board.summaries(), @r###"
    [
      {
        "id": 0,
        "name": "Infantry",
        "text": null,
        "x": 100.5,
        "y": 50.25
      },
      {
        "id": 1,
        "name": "Text Box (Unit Code)",
        "text": "UNIT",
        "x": 250.5,
        "y": 80.75
      }
    ]
    "###);
}

#[test]
fn snapshot_inspector_view() {
    let mut board = TestBoardBuilder::new().with_text((12.0, 34.0)).build();
    let inspector = Inspector::attach(&mut board);

    insta::assert_json_snapshot!(inspector.view(), @r###"
    {
      "lines": [
        "1. Text Box (Unit Code): \"UNIT\" @ (12, 34)"
      ],
      "selection_label": "Text Box (Unit Code) (text)",
      "slider_percent": 100,
      "text_value": "UNIT",
      "text_controls_enabled": true
    }
    "###);
}
