//! Incentives-figure lookup.
//!
//! Each of the seven bias levels used in the experiment has a
//! pre-rendered incentives graph. The link is carried on the derivation
//! but not embedded in the page fragment while the images are disabled.

use lazy_static::lazy_static;

lazy_static! {
    /// Bias level to incentives-graph link.
    static ref FIGURE_LINKS: Vec<(f64, &'static str)> = vec![
        (-10.0, "https://www.dropbox.com/scl/fi/pi1b7i4tm0o5fg4qql0ob/sender_incentives_graph_m10.png?rlkey=b32cox0ykk3lg2m7czo1zen60&st=ec0tj8qz&raw=1"),
        (-5.0, "https://www.dropbox.com/scl/fi/i0m5se4hhbhudy9vdzjtd/sender_incentives_graph_m5.png?rlkey=c2j4i92onnlp585yxhuqj166q&st=lhq76olj&raw=1"),
        (-1.0, "https://www.dropbox.com/scl/fi/00kjz2bk9j7kdzapcu1vh/sender_incentives_graph_m1.png?rlkey=mmg4gflb87zatvrtkit6btkbj&st=bqoql4rx&raw=1"),
        (0.0, "https://www.dropbox.com/scl/fi/j5sitnmmhf0kylxzhc5mb/sender_incentives_graph_0.png?rlkey=ennb3i3sfezdf6ulsobjp2axp&st=b2b64ncc&raw=1"),
        (1.0, "https://www.dropbox.com/scl/fi/ue7tv2fmn65v8j8smp497/sender_incentives_graph_p1.png?rlkey=dpx8rwqt2ezoqzfqxv3byy9sf&st=84jah5zg&raw=1"),
        (5.0, "https://www.dropbox.com/scl/fi/rvlnxmqxfwzql66vpyys9/sender_incentives_graph_p5.png?rlkey=qhpepyfnyasgmvly76x6njdxv&st=ozqiumq5&raw=1"),
        (10.0, "https://www.dropbox.com/scl/fi/62ley73xn5dwdwu9m77s2/sender_incentives_graph_p10.png?rlkey=c1m0rq0ftks3d7j3t017mxg7t&st=nw3jq90y&raw=1"),
    ];
}

/// Link to the incentives graph for `bias`, or an empty string when the
/// value is not one of the seven charted levels.
pub fn figure_link(bias: f64) -> &'static str {
    for &(level, link) in FIGURE_LINKS.iter() {
        if bias == level {
            return link;
        }
    }
    tracing::warn!(bias, "bias value has no matching incentives figure");
    ""
}
