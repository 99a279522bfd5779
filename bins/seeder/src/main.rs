//! Database seeder for Tally development and testing.
//!
//! Seeds sample companies, industries, industry links, and invoices for
//! local development and testing purposes.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tally_db::entities::{companies, company_industries, industries, invoices};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = tally_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding companies...");
    seed_companies(&db).await;

    println!("Seeding industries...");
    seed_industries(&db).await;

    println!("Seeding industry links...");
    seed_industry_links(&db).await;

    println!("Seeding invoices...");
    seed_invoices(&db).await;

    println!("Seeding complete!");
}

/// Seeds sample companies for development.
async fn seed_companies(db: &DatabaseConnection) {
    let samples = [
        ("apple", "Apple Computer", Some("Maker of OSX.")),
        ("ibm", "IBM", Some("Big blue.")),
    ];

    for (code, name, description) in samples {
        if companies::Entity::find_by_id(code)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Company '{code}' already exists, skipping...");
            continue;
        }

        let company = companies::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            description: Set(description.map(ToString::to_string)),
        };

        if let Err(e) = company.insert(db).await {
            eprintln!("Failed to insert company '{code}': {e}");
        } else {
            println!("  Created company: {code}");
        }
    }
}

/// Seeds sample industries for development.
async fn seed_industries(db: &DatabaseConnection) {
    let samples = [("acct", "Accounting"), ("tech", "Technology")];

    for (code, name) in samples {
        if industries::Entity::find_by_id(code)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Industry '{code}' already exists, skipping...");
            continue;
        }

        let industry = industries::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
        };

        if let Err(e) = industry.insert(db).await {
            eprintln!("Failed to insert industry '{code}': {e}");
        } else {
            println!("  Created industry: {code}");
        }
    }
}

/// Seeds company/industry links for development.
async fn seed_industry_links(db: &DatabaseConnection) {
    let samples = [("apple", "tech"), ("ibm", "tech"), ("ibm", "acct")];

    for (comp_code, ind_code) in samples {
        if company_industries::Entity::find_by_id((comp_code.to_string(), ind_code.to_string()))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Link {comp_code}/{ind_code} already exists, skipping...");
            continue;
        }

        let link = company_industries::ActiveModel {
            comp_code: Set(comp_code.to_string()),
            ind_code: Set(ind_code.to_string()),
        };

        if let Err(e) = link.insert(db).await {
            eprintln!("Failed to insert link {comp_code}/{ind_code}: {e}");
        } else {
            println!("  Created link: {comp_code}/{ind_code}");
        }
    }
}

/// Seeds sample invoices for development.
async fn seed_invoices(db: &DatabaseConnection) {
    let existing = invoices::Entity::find().count(db).await.unwrap_or(0);
    if existing > 0 {
        println!("  Invoices already exist, skipping...");
        return;
    }

    let today = Utc::now().date_naive();
    let samples = [
        ("apple", 100, false, None),
        ("apple", 200, false, None),
        ("apple", 300, true, NaiveDate::from_ymd_opt(2018, 1, 1)),
        ("ibm", 400, false, None),
    ];

    for (comp_code, amt, paid, paid_date) in samples {
        let invoice = invoices::ActiveModel {
            comp_code: Set(comp_code.to_string()),
            amt: Set(Decimal::from(amt)),
            paid: Set(paid),
            add_date: Set(today),
            paid_date: Set(paid_date),
            ..Default::default()
        };

        if let Err(e) = invoice.insert(db).await {
            eprintln!("Failed to insert invoice for '{comp_code}': {e}");
        } else {
            println!("  Created invoice: {comp_code} / {amt}");
        }
    }
}
