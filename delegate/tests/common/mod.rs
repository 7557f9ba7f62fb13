//! Fridge, oven and kitchen classes shared by the integration tests.

#![allow(dead_code)]

use delegate::{Class, Object, Value};

pub struct Appliances {
    pub fridge: Class,
    pub oven: Class,
    pub kitchen: Class,
}

pub fn appliances() -> Appliances {
    let fridge = Class::builder("Fridge")
        .field("brand")
        .method("cool", |_this, _args| Ok(Value::from("-18° C")))
        .build();
    let oven = Class::builder("Oven")
        .field("brand")
        .method("heat", |_this, _args| Ok(Value::from("200° C")))
        .build();
    let kitchen = Class::builder("Kitchen")
        .field("fridge")
        .field("oven")
        .method("bake", |_this, _args| Ok(Value::from("Cake")))
        .build();
    Appliances {
        fridge,
        oven,
        kitchen,
    }
}

pub fn house_class() -> Class {
    Class::builder("House").field("kitchen").build()
}

/// A house whose kitchen holds a Bosch fridge and an Electrolux oven.
pub fn furnished(house: &Class) -> Object {
    let Appliances {
        fridge,
        oven,
        kitchen,
    } = appliances();
    let fridge = fridge.construct(["Bosch"]).unwrap();
    let oven = oven.construct(["Electrolux"]).unwrap();
    let kitchen = kitchen.construct([fridge, oven]).unwrap();
    house.construct([kitchen]).unwrap()
}

/// Follow `path` field by field, without going through any delegation.
pub fn dig(object: &Object, path: &str) -> Result<Value, delegate::AccessError> {
    let mut current = Value::from(object);
    for segment in path.split('.') {
        current = current.get_attr(segment)?;
    }
    Ok(current)
}
