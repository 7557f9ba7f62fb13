//! Delegated properties on a house that owns a kitchen.

mod common;

use common::{dig, furnished, house_class};
use delegate::{
    AccessError, Class, DelegateExt, Delegates, Member, SetupError, Value, delegate, delegates,
};
use delegate_testhelpers::test;

#[test]
fn reads_follow_the_ownership_chain() {
    let house = house_class();
    house
        .delegate(("kitchen.fridge", "brand", "fridge_brand"))
        .unwrap();
    let home = furnished(&house);

    assert_eq!(home.get_attr("fridge_brand").unwrap(), Value::from("Bosch"));
    assert_eq!(
        home.get_attr("fridge_brand").unwrap(),
        dig(&home, "kitchen.fridge.brand").unwrap()
    );
}

#[test]
fn writes_land_on_the_nested_object() {
    let house = house_class();
    house
        .delegate(("kitchen.fridge", "brand", "fridge_brand"))
        .unwrap();
    let home = furnished(&house);

    for brand in ["Miele", "Liebherr"] {
        home.set_attr("fridge_brand", brand).unwrap();
        assert_eq!(home.get_attr("fridge_brand").unwrap(), Value::from(brand));
        assert_eq!(dig(&home, "kitchen.fridge.brand").unwrap(), Value::from(brand));
    }

    // the house itself did not grow a field
    assert_eq!(home.field_names(), ["kitchen"]);
}

#[test]
fn deletes_remove_the_nested_field() {
    let house = house_class();
    house
        .delegate(("kitchen.fridge", "brand", "fridge_brand"))
        .unwrap();
    let home = furnished(&house);

    home.del_attr("fridge_brand").unwrap();

    let err = home.get_attr("fridge_brand").unwrap_err();
    let missing = err.as_missing().unwrap();
    assert_eq!(missing.type_name, "Fridge");
    assert_eq!(missing.attribute, "brand");
    assert!(dig(&home, "kitchen.fridge.brand").unwrap_err().is_missing());

    // deleting again reports the same absence
    assert!(home.del_attr("fridge_brand").unwrap_err().is_missing());
}

#[test]
fn default_name_is_last_attribute_segment() {
    let house = house_class();
    house.delegate(("kitchen", "oven.heat")).unwrap();
    let home = furnished(&house);

    assert!(house.has_member("heat"));
    assert_eq!(home.call_method("heat", &[]).unwrap(), Value::from("200° C"));
}

#[test]
fn list_of_attributes_installs_one_property_each() {
    let house = house_class();
    house.delegate(("kitchen", ["oven", "fridge"])).unwrap();
    let home = furnished(&house);

    assert_eq!(house.member_names(), ["oven", "fridge"]);
    assert_eq!(home.get_attr("oven").unwrap(), dig(&home, "kitchen.oven").unwrap());
    assert_eq!(
        home.get_attr("fridge").unwrap(),
        dig(&home, "kitchen.fridge").unwrap()
    );
    insta::assert_snapshot!(
        home.get_attr("oven").unwrap(),
        @"Oven(brand='Electrolux')"
    );
}

#[test]
fn arity_mismatch_fails_setup() {
    let house = house_class();
    let err = house
        .delegate(("kitchen", ["bake", "cool"], ["only_one_name"]))
        .unwrap_err();
    assert!(matches!(
        err,
        SetupError::ArityMismatch {
            attributes: 2,
            names: 1,
            ..
        }
    ));
    insta::assert_snapshot!(
        err,
        @"cannot delegate to `kitchen`: 2 attribute path(s) but 1 exposed name(s)"
    );
    assert!(house.member_names().is_empty());
}

#[test]
fn delegation_shadows_existing_members() {
    let house = Class::builder("House")
        .field("kitchen")
        .method("cool", |_this, _args| Ok(Value::from("open a window")))
        .attribute("bake", "nothing")
        .build();
    let home = furnished(&house);
    assert_eq!(home.call_method("cool", &[]).unwrap(), Value::from("open a window"));

    house.delegate(("kitchen.fridge", "cool")).unwrap();
    house.delegate(("kitchen", "bake")).unwrap();

    assert_eq!(home.call_method("cool", &[]).unwrap(), Value::from("-18° C"));
    assert_eq!(home.call_method("bake", &[]).unwrap(), Value::from("Cake"));
    assert!(matches!(house.member("cool"), Some(Member::Property(_))));
}

#[test]
fn delegated_name_hides_instance_field() {
    let house = house_class();
    let home = furnished(&house);
    home.set_attr("brand", "own brand").unwrap();

    house.delegate(("kitchen.oven", "brand")).unwrap();
    assert_eq!(home.get_attr("brand").unwrap(), Value::from("Electrolux"));
    assert_eq!(home.get_field("brand"), Some(Value::from("own brand")));
}

#[test]
fn last_registration_wins() {
    let house = house_class();
    house
        .delegates(delegates![
            ("kitchen.fridge", "brand"),
            ("kitchen.oven", "brand"),
        ])
        .unwrap();
    let home = furnished(&house);
    assert_eq!(home.get_attr("brand").unwrap(), Value::from("Electrolux"));
    assert_eq!(house.member_names(), ["brand"]);
}

#[test]
fn methods_delegate_bound_to_the_nested_object() {
    let house = house_class();
    house
        .delegates(delegates![
            ("kitchen", ["oven", "fridge", "bake"]),
            ("kitchen", "bake", "make_cake"),
            ("kitchen.fridge", "cool"),
            ("kitchen.oven", "heat"),
        ])
        .unwrap();
    let home = furnished(&house);

    let bake = home.get_attr("make_cake").unwrap();
    let bound = bake.as_method().unwrap();
    assert!(Value::from(bound.receiver()) == dig(&home, "kitchen").unwrap());

    assert_eq!(home.call_method("bake", &[]).unwrap(), Value::from("Cake"));
    assert_eq!(home.call_method("make_cake", &[]).unwrap(), Value::from("Cake"));
    assert_eq!(home.call_method("cool", &[]).unwrap(), Value::from("-18° C"));
    assert_eq!(home.call_method("heat", &[]).unwrap(), Value::from("200° C"));
}

#[test]
fn missing_intermediate_link_surfaces_at_call_time() {
    let house = house_class();
    // setup never looks at instances, so this succeeds
    house.delegate(("kitchen.pantry", "flour")).unwrap();
    let home = furnished(&house);

    let err = home.get_attr("flour").unwrap_err();
    assert_eq!(
        err.as_missing().map(|m| (m.type_name.as_str(), m.attribute.as_str())),
        Some(("Kitchen", "pantry"))
    );
    assert!(home.set_attr("flour", 1).unwrap_err().is_missing());
    assert!(home.del_attr("flour").unwrap_err().is_missing());
}

#[test]
fn hop_through_a_scalar_is_missing() {
    let house = house_class();
    house.delegate(("kitchen.fridge.brand", "logo")).unwrap();
    let home = furnished(&house);

    let err = home.get_attr("logo").unwrap_err();
    insta::assert_snapshot!(err, @"'str' object has no attribute 'logo'");
}

#[test]
fn invalid_paths_fail_setup_without_installing() {
    let house = house_class();
    let err = house
        .delegate(("kitchen", ["oven", "fridge..brand"]))
        .unwrap_err();
    let SetupError::InvalidPath(path_err) = &err else {
        panic!("expected an invalid path, got {err:?}");
    };
    assert_eq!(path_err.path(), "fridge..brand");
    // the valid first attribute of the same call was not installed either
    assert!(!house.has_member("oven"));

    assert!(house.delegate(("", "brand")).is_err());
    assert!(house.delegate((".kitchen", "brand")).is_err());
    assert!(house.delegate(("kitchen.", "brand")).is_err());
    assert!(house.member_names().is_empty());
}

#[test]
fn batch_failure_keeps_earlier_calls() {
    let house = house_class();
    let batch = Delegates::new()
        .with(("kitchen", "bake"))
        .with(("kitchen", ["oven", "fridge"], ["stove"]))
        .with(("kitchen.fridge", "cool"));

    let err = house.delegates(batch).unwrap_err();
    assert!(matches!(err, SetupError::ArityMismatch { .. }));
    assert_eq!(house.member_names(), ["bake"]);
}

#[test]
fn stacked_decorations() {
    let house = house_class();
    house
        .delegate(("kitchen", "bake"))
        .and_then(|house| house.delegate(("kitchen", ["oven", "fridge"])))
        .and_then(|house| house.delegate(("kitchen", "bake", "make_cake")))
        .and_then(|house| {
            house.delegates(delegates![("kitchen.fridge", "cool"), ("kitchen", "oven.heat")])
        })
        .unwrap();

    assert_eq!(
        house.member_names(),
        ["bake", "oven", "fridge", "make_cake", "cool", "heat"]
    );

    let home = furnished(&house);
    insta::assert_snapshot!(
        format!("{} {}", home.get_attr("oven").unwrap(), home.get_attr("fridge").unwrap()),
        @"Oven(brand='Electrolux') Fridge(brand='Bosch')"
    );
}

#[test]
fn delegate_function_form() {
    let house = house_class();
    delegate("kitchen", ["bake", "oven.heat"])
        .named(["make_cake", "warm"])
        .apply(&house)
        .unwrap();
    let home = furnished(&house);
    assert_eq!(home.call_method("warm", &[]).unwrap(), Value::from("200° C"));

    let doc = house
        .member("warm")
        .and_then(|member| member.as_property().and_then(|p| p.doc().map(String::from)));
    assert_eq!(doc.as_deref(), Some("delegates to self.kitchen.oven.heat"));
}

#[test]
fn constructor_writes_go_through_delegated_fields() {
    // `fridge` is both a declared field and a delegated name; the
    // constructor's assignment is routed into the kitchen.
    let common::Appliances {
        fridge, kitchen, ..
    } = common::appliances();
    let house = Class::builder("House")
        .field("kitchen")
        .field_with_default("fridge", ())
        .build();
    house.delegate(("kitchen", "fridge")).unwrap();

    let kitchen = kitchen.construct([Value::None, Value::None]).unwrap();
    let liebherr = fridge.construct(["Liebherr"]).unwrap();
    let home = house.construct([Value::from(&kitchen), Value::from(&liebherr)]).unwrap();

    assert_eq!(kitchen.get_attr("fridge").unwrap(), Value::from(liebherr));
    assert!(home.get_field("fridge").is_none());
}

#[test]
fn accessor_errors_are_not_recovered() {
    let house = house_class();
    house.delegate(("kitchen", "oven.temperature")).unwrap();
    let home = furnished(&house);
    // no default is invented for a field that was never set
    assert!(matches!(
        home.get_attr("temperature"),
        Err(AccessError::MissingAttribute(_))
    ));
}
