use rpo_plot::viz::{self, Axis, LegendSource, SeriesStyle, dedup_entries, dedup_legend};
use rpo_plot::{Domain, Representation, TimeData};
use std::collections::HashSet;

/// Axis stand-in that hands back whatever legend it was built with.
struct FakeAxis {
    entries: Result<Vec<(&'static str, String)>, String>,
}

impl LegendSource for FakeAxis {
    type Handle = &'static str;
    type Error = String;

    fn legend_handles_labels(&self) -> Result<Vec<(&'static str, String)>, String> {
        self.entries.clone()
    }
}

fn fake(pairs: &[(&'static str, &str)]) -> FakeAxis {
    FakeAxis {
        entries: Ok(pairs.iter().map(|(h, l)| (*h, l.to_string())).collect()),
    }
}

#[test]
fn first_occurrence_wins() {
    let ax = fake(&[("h1", "A"), ("h2", "B"), ("h3", "A"), ("h4", "C")]);
    let (handles, labels) = dedup_legend(&ax).unwrap();
    assert_eq!(handles, vec!["h1", "h2", "h4"]);
    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn output_is_unique_ordered_and_aligned() {
    let inputs: Vec<Vec<(&'static str, &str)>> = vec![
        vec![],
        vec![("a", "x")],
        vec![("a", "x"), ("b", "x"), ("c", "x")],
        vec![("a", "z"), ("b", "y"), ("c", "z"), ("d", "x"), ("e", "y"), ("f", "w")],
    ];
    for pairs in inputs {
        let (handles, labels) = dedup_legend(&fake(&pairs)).unwrap();

        let distinct: HashSet<&str> = pairs.iter().map(|(_, l)| *l).collect();
        assert_eq!(handles.len(), labels.len());
        assert_eq!(labels.len(), distinct.len());

        let unique: HashSet<&String> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());

        // Every kept handle is the first one carrying its label, in input order.
        let mut expected = Vec::new();
        let mut seen = HashSet::new();
        for (h, l) in &pairs {
            if seen.insert(*l) {
                expected.push((*h, l.to_string()));
            }
        }
        let got: Vec<(&str, String)> = handles.into_iter().zip(labels).collect();
        assert_eq!(got, expected);
    }
}

#[test]
fn differing_handles_with_same_label_are_dropped() {
    let (handles, _) = dedup_entries(vec![(10, "fit".to_string()), (11, "fit".to_string())]);
    assert_eq!(handles, vec![10]);
}

#[test]
fn source_errors_propagate() {
    let ax = FakeAxis {
        entries: Err("3 handles but 2 labels".into()),
    };
    assert_eq!(dedup_legend(&ax), Err("3 handles but 2 labels".to_string()));
}

#[test]
fn overlaid_thermograms_share_legend_entries() {
    let mut ax = Axis::new();
    for shift in [0.0, 15.0] {
        let td = TimeData::new(
            vec![0.0, 60.0, 120.0],
            vec![373.0 + shift, 378.0 + shift, 383.0 + shift],
            vec![1.0, 0.5, 0.0],
        )
        .unwrap()
        .with_modeled(vec![1.0, 0.4, 0.0])
        .unwrap();
        viz::plot_time_data(&mut ax, &td, Domain::Temp, Representation::Fraction).unwrap();
    }
    ax.plot(&[380.0, 380.0], &[0.0, 1.0], SeriesStyle::OBSERVED, None)
        .unwrap();

    assert_eq!(ax.legend_handles_labels().unwrap().len(), 4);
    let (handles, labels) = dedup_legend(&ax).unwrap();
    assert_eq!(labels, vec![viz::OBSERVED_LABEL, viz::MODELED_LABEL]);
    assert_eq!(
        handles.iter().map(|h| h.index()).collect::<Vec<_>>(),
        vec![0, 1]
    );
}
