mod common;

use common::{test_config, MapFetcher};
use pycompat_ops::ops_wheels::{fetch_artifacts, fetch_matrix, wheels, WheelOptions};
use pycompat_wheel::matcher::MatchCriteria;

const MATRIX_URL: &str = "https://raw.test/README.md";
const INDEX_URL: &str = "https://download.test/whl/torch_stable.html";

const README: &str = "\
| `torch` | `torchvision` | Python |
| ------- | ------------- | ------ |
| `main` / `nightly` | `main` / `nightly` | `>=3.9` |
| `2.1` | `0.16` | `>=3.8`, `<=3.11` |

<details>
<summary>older versions</summary>

| `torch` | `torchvision` | Python |
|---|---|---|
| `2.1` | `0.15` | `>=3.8` |
| `2.0` | `0.15` | `>=3.8` |

</details>
";

const INDEX: &str = r#"
<a href="cu121/torch-2.1.0%2Bcu121-cp310-cp310-linux_x86_64.whl">a</a>
<a href="cu121/torch-2.1.0%2Bcu121-cp310-cp310-win_amd64.whl">b</a>
<a href="cpu/torch-2.1.2%2Bcpu-cp310-cp310-linux_x86_64.whl">c</a>
<a href="cu118/torch-2.0.1%2Bcu118-cp310-cp310-linux_x86_64.whl">d</a>
<a href="cu118/torch-1.13.1%2Bcu117-cp310-cp310-linux_x86_64.whl">e</a>
<a href="cu121/torchvision-0.16.0%2Bcu121-cp310-cp310-linux_x86_64.whl">f</a>
<a href="cu121/torch-2.1.0%2Bcu121-cp311-cp311-linux_x86_64.whl">g</a>
"#;

fn fetcher() -> MapFetcher {
    MapFetcher::default()
        .with(MATRIX_URL, README)
        .with(INDEX_URL, INDEX)
}

fn opts(criteria: MatchCriteria, list_all: bool) -> WheelOptions {
    WheelOptions { criteria, list_all }
}

#[test]
fn matrix_fetched_and_parsed() {
    let matrix = fetch_matrix(&fetcher(), &test_config()).unwrap();
    assert_eq!(matrix.get("2.1"), Some("0.16"));
    assert_eq!(matrix.get("2.0"), Some("0.15"));
}

#[test]
fn matrix_unreachable_is_fatal() {
    let fetch = MapFetcher::default().with(INDEX_URL, INDEX);
    let err = wheels(&fetch, &test_config(), &opts(MatchCriteria::new("3.10"), false));
    assert!(err.is_err());
}

#[test]
fn matrix_without_table_is_fatal() {
    let fetch = MapFetcher::default()
        .with(MATRIX_URL, "# torchvision\n")
        .with(INDEX_URL, INDEX);
    let err = wheels(&fetch, &test_config(), &opts(MatchCriteria::new("3.10"), false)).unwrap_err();
    assert!(err.to_string().contains("Compatibility matrix error"), "got: {err}");
}

#[test]
fn index_unreachable_is_empty() {
    let fetch = MapFetcher::default().with(MATRIX_URL, README);
    assert!(fetch_artifacts(&fetch, &test_config()).is_empty());

    let report = wheels(&fetch, &test_config(), &opts(MatchCriteria::new("3.10"), false)).unwrap();
    assert!(report.is_empty());
    assert_eq!(
        report.to_string(),
        "No compatible wheel files found for Python 3.10, CUDA any, and variant any.\n"
    );
}

#[test]
fn resolves_torch_sets() {
    let report = wheels(&fetcher(), &test_config(), &opts(MatchCriteria::new("3.10"), false)).unwrap();
    let pins: Vec<String> = report.resolutions.iter().map(|r| r.torch_pin()).collect();
    assert_eq!(
        pins,
        vec![
            "torch==2.1.0+cu121",
            "torch==2.1.2+cpu",
            "torch==2.0.1+cu118",
            "torch==1.13.1+cu117",
        ]
    );
    assert_eq!(report.resolutions[0].vision_version.as_deref(), Some("0.16.0"));
    assert_eq!(report.resolutions[1].vision_version.as_deref(), Some("0.16.2"));
    assert_eq!(report.resolutions[2].vision_version.as_deref(), Some("0.15.1"));
    assert_eq!(report.resolutions[3].vision_version, None);
}

#[test]
fn resolved_report_rendering() {
    let criteria = MatchCriteria::new("3.10").with_variant_substring(Some("121".to_string()));
    let report = wheels(&fetcher(), &test_config(), &opts(criteria, false)).unwrap();
    assert_eq!(
        report.to_string(),
        "Compatible versions for Python 3.10, CUDA 121, and variant any:\n\
         \n\
         torch==2.1.0+cu121\n\
         \x20    torchaudio==2.1.0+cu121\n\
         \x20    torchvision==0.16.0+cu121\n"
    );
}

#[test]
fn unresolved_companion_rendering() {
    let criteria = MatchCriteria::new("3.10").with_exact_variant(Some("cu117".to_string()));
    let report = wheels(&fetcher(), &test_config(), &opts(criteria, false)).unwrap();
    let text = report.to_string();
    assert!(text.contains("torch==1.13.1+cu117"));
    assert!(text.contains("- No matching torchvision version found."));
}

#[test]
fn list_mode_skips_matrix_and_lists_everything() {
    // no matrix URL registered: list mode must not need it
    let fetch = MapFetcher::default().with(INDEX_URL, INDEX);
    let criteria = MatchCriteria::new("3.10").with_variant_substring(Some("cu121".to_string()));
    let report = wheels(&fetch, &test_config(), &opts(criteria, true)).unwrap();
    assert!(report.resolutions.is_empty());
    assert_eq!(
        report.to_string(),
        "Compatible wheel files for Python 3.10, CUDA cu121, and variant any:\n\
         \x20 - torch version: 2.1.0 (build: cu121)\n\
         \x20 - torchvision version: 0.16.0 (build: cu121)\n"
    );
}

#[test]
fn only_companion_wheels_matched_is_no_result() {
    let fetch = MapFetcher::default().with(MATRIX_URL, README).with(
        INDEX_URL,
        r#"<a href="torchvision-0.16.0%2Bcu121-cp310-cp310-linux_x86_64.whl">x</a>"#,
    );
    let report = wheels(&fetch, &test_config(), &opts(MatchCriteria::new("3.10"), false)).unwrap();
    assert_eq!(report.matched.len(), 1);
    assert!(report.is_empty());
}
