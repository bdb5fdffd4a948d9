//! Property tests for user profile invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use people_data::domain::foundation::UserId;
use people_data::domain::people::{DefaultRole, PackageData, UserData};

#[derive(Debug, Clone)]
enum Op {
    Create(String),
    SetDefault(DefaultRole, Option<String>),
}

fn package_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["com.a", "com.b", "com.c", "com.d", ""]).prop_map(String::from)
}

fn role() -> impl Strategy<Value = DefaultRole> {
    prop::sample::select(DefaultRole::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        package_name().prop_map(Op::Create),
        (role(), prop::option::of(package_name())).prop_map(|(r, n)| Op::SetDefault(r, n)),
    ]
}

fn apply(user_data: &mut UserData, op: &Op) {
    match op {
        Op::Create(name) => {
            user_data.get_or_create_package_data(name);
        }
        Op::SetDefault(role, name) => user_data.set_default(*role, name.as_deref()),
    }
}

proptest! {
    #[test]
    fn each_role_has_at_most_one_holder(ops in prop::collection::vec(op(), 0..40)) {
        let mut user_data = UserData::new(UserId::new(0));
        for op in &ops {
            apply(&mut user_data, op);
            for role in DefaultRole::ALL {
                let count = user_data.packages().filter(|d| d.is_default(role)).count();
                prop_assert!(count <= 1);
            }
        }
    }

    #[test]
    fn role_holder_matches_last_assignment(ops in prop::collection::vec(op(), 0..40)) {
        let mut user_data = UserData::new(UserId::new(0));
        for op in &ops {
            apply(&mut user_data, op);
            if let Op::SetDefault(role, name) = op {
                let expected = name
                    .as_deref()
                    .filter(|n| user_data.package_data(n).is_some());
                let actual = user_data.default_package(*role).map(PackageData::package_name);
                prop_assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn records_match_distinct_created_names(ops in prop::collection::vec(op(), 0..40)) {
        let mut user_data = UserData::new(UserId::new(3));
        let mut created = HashSet::new();
        for op in &ops {
            apply(&mut user_data, op);
            if let Op::Create(name) = op {
                created.insert(name.clone());
            }
        }

        let stored: HashSet<String> = user_data
            .packages()
            .map(|d| d.package_name().to_string())
            .collect();
        prop_assert_eq!(stored, created);
        prop_assert!(user_data.packages().all(|d| d.user_id() == UserId::new(3)));
    }
}
