//! A house that exposes parts of its kitchen as its own members.

use delegate::{AccessError, Class, DelegateExt, SetupError, Value, delegates};

fn main() -> Result<(), Box<dyn std::error::Error>> {
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
    let house = Class::builder("House").field("kitchen").build();

    house.delegates(delegates![
        ("kitchen", ["oven", "fridge", "bake"]),
        ("kitchen", "bake", "make_cake"),
        ("kitchen.fridge", "cool"),
        ("kitchen.oven", "heat"),
    ])?;

    let fridge = fridge.construct(["Bosch"])?;
    let oven = oven.construct(["Electrolux"])?;
    let kitchen = kitchen.construct([fridge, oven])?;
    let house = house.construct([kitchen])?;

    println!("{} {}", house.get_attr("oven")?, house.get_attr("fridge")?);
    println!("{}", house.call_method("bake", &[])?);
    println!("{}", house.call_method("cool", &[])?);
    println!("{}", house.call_method("heat", &[])?);
    println!("{}", house.call_method("make_cake", &[])?);

    match house.class().delegate(("kitchen", ["bake", "cool"], ["only_one_name"])) {
        Err(err @ SetupError::ArityMismatch { .. }) => println!("setup rejected: {err}"),
        other => println!("unexpected: {other:?}"),
    }

    house.del_attr("oven")?;
    if let Err(err @ AccessError::MissingAttribute(_)) = house.get_attr("oven") {
        println!("after delete: {err}");
    }

    Ok(())
}
