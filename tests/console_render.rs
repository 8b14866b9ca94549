use trirasterizer::config::{OutputConfig, RenderConfig};
use trirasterizer::console::{self, Label};
use trirasterizer::scan::{LabelWriter, ScanRegion, par_scan, scan};
use trirasterizer::{Grid, analyze};

const EXPECTED: [&str; 42] = [
    "+----------------------------------------------------------------------+\n",
    "|                                                                      |\n",
    "|                                                                      |\n",
    "|                                                                      |\n",
    "|   *                                                                  |\n",
    "|    **                                                                |\n",
    "|     ***                                                              |\n",
    "|       ****                                                           |\n",
    "|        *****                                                         |\n",
    "|          *****                                                       |\n",
    "|           *******                                                    |\n",
    "|            ********                                                  |\n",
    "|              *********                                               |\n",
    "|               **********                                             |\n",
    "|                ***********                                           |\n",
    "|                  ************                                        |\n",
    "|                   *************                                      |\n",
    "|                     *************                                    |\n",
    "|                      ***************                                 |\n",
    "|                       ****************                               |\n",
    "|                         *****************                            |\n",
    "|                          ******************                          |\n",
    "|                           *******************                        |\n",
    "|                             ********************                     |\n",
    "|                              *********************                   |\n",
    "|                                *********************                 |\n",
    "|                                 ***********************              |\n",
    "|                                  ************************            |\n",
    "|                                    *************************         |\n",
    "|                                     **************************       |\n",
    "|                                      ***************************     |\n",
    "|                                        ***********************       |\n",
    "|                                         *********************        |\n",
    "|                                           ******************         |\n",
    "|                                            ****************          |\n",
    "|                                             *************            |\n",
    "|                                               **********             |\n",
    "|                                                ********              |\n",
    "|                                                 ******               |\n",
    "|                                                   **                 |\n",
    "|                                                                      |\n",
    "+----------------------------------------------------------------------+\n",
];

fn console_config() -> RenderConfig {
    let json = r#"{
        "triangle": { "a": {"x": 1.02, "y": 2.11}, "b": {"x": 64.28, "y": 28.79}, "c": {"x": 51.63, "y": 38.99} },
        "output": { "mode": "console", "width": 70, "height": 40 }
    }"#;
    serde_json::from_str(json).unwrap()
}

#[test_log::test]
fn console_picture_of_the_sample_triangle() {
    let config = console_config();
    let OutputConfig::Console { width, height } = config.output else { panic!("expected console output") };
    let info = analyze(config.triangle).unwrap();
    let mut grid: Grid<Label> = Grid::new(width, height);
    let interior = scan(&mut grid, &info, config.region, &LabelWriter);
    assert_eq!(interior, 492);
    assert_eq!(console::render_ascii(&grid), EXPECTED.concat());
    assert_eq!(console::summary(&grid, interior), "492 of 2800 cells interior");
}

#[test_log::test]
fn every_scan_strategy_draws_the_same_picture() {
    let config = console_config();
    let info = analyze(config.triangle).unwrap();
    for region in [ScanRegion::Full, ScanRegion::BoundingBox] {
        let mut grid: Grid<Label> = Grid::new(70, 40);
        assert_eq!(par_scan(&mut grid, &info, region, &LabelWriter), 492);
        assert_eq!(console::render_ascii(&grid), EXPECTED.concat());
    }
}
