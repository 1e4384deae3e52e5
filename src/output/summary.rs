//! End of run summary.

use crate::processing::SubnetVlanMap;
use colored::Colorize;

/// One line per router: how many VLANs it carries and which.
pub fn summary_lines(subnets: &SubnetVlanMap) -> Vec<String> {
    subnets
        .routers()
        .map(|(router, vlans)| {
            let numbers: Vec<String> = vlans.keys().map(|n| n.to_string()).collect();
            format!(
                "router {router}: {count} vlans [{numbers}]",
                count = vlans.len(),
                numbers = numbers.join(", ")
            )
        })
        .collect()
}

/// Log the per-router summary.
pub fn log_summary(subnets: &SubnetVlanMap) {
    log::info!(
        "{} {} subnets on {} routers",
        "#Summary".on_green(),
        subnets.len(),
        subnets.routers().count()
    );
    for line in summary_lines(subnets) {
        log::info!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;

    #[test]
    fn test_summary_lines_sorted() {
        let mut subnets = SubnetVlanMap::new();
        subnets.insert("router-b", 7, Subnet::default());
        subnets.insert("router-a", 300, Subnet::default());
        subnets.insert("router-a", 42, Subnet::default());
        assert_eq!(
            summary_lines(&subnets),
            vec![
                "router router-a: 2 vlans [42, 300]",
                "router router-b: 1 vlans [7]"
            ]
        );
    }
}
