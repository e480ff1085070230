//! Boot-time seeding: the super admin account, and optionally a small demo
//! catalog so a fresh instance renders a complete storefront.

use sea_orm::Set;

use crate::{
    db::dao::{DaoBase, DaoContext},
    db::entities::{
        dealer, faq_category, faq_question, hero_slide, smart_feature, stat, testimonial,
        vehicle, vehicle_color, vehicle_spec,
    },
    services::ServiceContext,
    state::AppState,
};

pub async fn run(state: &AppState) -> anyhow::Result<()> {
    let services = ServiceContext::from_state(state);
    services.auth(&state.jwt).seed_admin(&state.config).await?;

    if state.config.demo_seed {
        seed_demo_catalog(state).await?;
    }
    Ok(())
}

async fn seed_demo_catalog(state: &AppState) -> anyhow::Result<()> {
    let daos = DaoContext::new(&state.db);

    let existing = daos.vehicle().list_by_status("active", None).await?;
    if !existing.is_empty() {
        tracing::info!("demo catalog already present, skipping seed");
        return Ok(());
    }
    tracing::info!("seeding demo catalog");

    let falcon = daos
        .vehicle()
        .create(vehicle::ActiveModel {
            name: Set("Falcon".to_string()),
            slug: Set("falcon".to_string()),
            tagline: Set("The everyday electric scooter".to_string()),
            description: Set("City commuter with swappable battery packs.".to_string()),
            category: Set("scooter".to_string()),
            status: Set("active".to_string()),
            display_order: Set(0),
            hero_image: Set(None),
            ..Default::default()
        })
        .await?;

    let kite = daos
        .vehicle()
        .create(vehicle::ActiveModel {
            name: Set("Kite Cargo".to_string()),
            slug: Set("kite-cargo".to_string()),
            tagline: Set("Last-mile delivery workhorse".to_string()),
            description: Set("Reinforced frame and a 120 litre cargo bay.".to_string()),
            category: Set("cargo".to_string()),
            status: Set("active".to_string()),
            display_order: Set(1),
            hero_image: Set(None),
            ..Default::default()
        })
        .await?;

    for (order, (label, value)) in [
        ("Battery Capacity", "1.7 kWh"),
        ("Range", "100 km"),
        ("Top Speed", "65 km/h"),
        ("Charging Time", "4 h"),
    ]
    .into_iter()
    .enumerate()
    {
        daos.vehicle_spec()
            .create(vehicle_spec::ActiveModel {
                vehicle_id: Set(falcon.id),
                label: Set(label.to_string()),
                value: Set(value.to_string()),
                display_order: Set(order as i32),
                ..Default::default()
            })
            .await?;
    }

    for (order, (label, value)) in [("Battery Capacity", "3.4 kWh"), ("Range", "110 km")]
        .into_iter()
        .enumerate()
    {
        daos.vehicle_spec()
            .create(vehicle_spec::ActiveModel {
                vehicle_id: Set(kite.id),
                label: Set(label.to_string()),
                value: Set(value.to_string()),
                display_order: Set(order as i32),
                ..Default::default()
            })
            .await?;
    }

    for (order, (name, hex_code)) in [("Glacier White", "#f4f4f4"), ("Midnight Blue", "#10233f")]
        .into_iter()
        .enumerate()
    {
        daos.vehicle_color()
            .create(vehicle_color::ActiveModel {
                vehicle_id: Set(falcon.id),
                name: Set(name.to_string()),
                hex_code: Set(hex_code.to_string()),
                image_url: Set(None),
                display_order: Set(order as i32),
                ..Default::default()
            })
            .await?;
    }

    daos.smart_feature()
        .create(smart_feature::ActiveModel {
            vehicle_id: Set(falcon.id),
            title: Set("Remote diagnostics".to_string()),
            description: Set("Battery health and trip history in the companion app.".to_string()),
            icon: Set(Some("activity".to_string())),
            display_order: Set(0),
            ..Default::default()
        })
        .await?;

    for (name, state_name, district, city) in [
        ("EV Hub Kochi", "Kerala", "Ernakulam", "Kochi"),
        ("EV Hub Kozhikode", "Kerala", "Kozhikode", "Kozhikode"),
        ("EV Hub Bengaluru", "Karnataka", "Bengaluru Urban", "Bengaluru"),
    ] {
        daos.dealer()
            .create(dealer::ActiveModel {
                name: Set(name.to_string()),
                state: Set(state_name.to_string()),
                district: Set(district.to_string()),
                city: Set(city.to_string()),
                address: Set("1 Showroom Road".to_string()),
                phone: Set(None),
                email: Set(None),
                active: Set(true),
                ..Default::default()
            })
            .await?;
    }

    let charging = daos
        .faq_category()
        .create(faq_category::ActiveModel {
            name: Set("Charging".to_string()),
            display_order: Set(0),
            ..Default::default()
        })
        .await?;

    daos.faq_question()
        .create(faq_question::ActiveModel {
            category_id: Set(charging.id),
            question: Set("Can I charge at home?".to_string()),
            answer: Set("Yes, any 5A household socket works.".to_string()),
            display_order: Set(0),
            ..Default::default()
        })
        .await?;

    daos.hero_slide()
        .create(hero_slide::ActiveModel {
            title: Set("Ride electric".to_string()),
            subtitle: Set(Some("Zero fuel, zero noise".to_string())),
            image_url: Set("/objects/uploads/demo-hero.jpg".to_string()),
            cta_label: Set(Some("Explore the Falcon".to_string())),
            cta_href: Set(Some("/vehicles/falcon".to_string())),
            display_order: Set(0),
            active: Set(true),
            ..Default::default()
        })
        .await?;

    daos.testimonial()
        .create(testimonial::ActiveModel {
            author: Set("Meera".to_string()),
            location: Set(Some("Kochi".to_string())),
            quote: Set("My commute now costs less than a cup of tea.".to_string()),
            rating: Set(5),
            display_order: Set(0),
            active: Set(true),
            ..Default::default()
        })
        .await?;

    for (order, (label, value, suffix)) in [
        ("Range", "100", Some("km")),
        ("Charge cost", "9", Some("₹")),
        ("Riders", "12000", None),
    ]
    .into_iter()
    .enumerate()
    {
        daos.stat()
            .create(stat::ActiveModel {
                label: Set(label.to_string()),
                value: Set(value.to_string()),
                suffix: Set(suffix.map(str::to_string)),
                display_order: Set(order as i32),
                ..Default::default()
            })
            .await?;
    }

    Ok(())
}
