//! Destructive reseed of the demo dataset.
//!
//! Wipes dependents first, then repopulates with cross-referencing foreign
//! keys resolved from the just-inserted parents' generated ids. Invoked only
//! by the `seed` binary and the test harness, never on server startup.

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use sea_orm::*;
use tracing::info;

use crate::entity::{blog_post, category, client_logo, contact_submission, project, service, user};
use crate::utils::hash;

/// Credentials of the seeded admin account.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "greenfield2023";

/// Password of the seeded editor accounts.
const EDITOR_PASSWORD: &str = "password123";

fn date(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

pub async fn run(db: &DatabaseConnection) -> Result<()> {
    info!("Seeding database...");

    // Clear existing data, dependents first
    blog_post::Entity::delete_many().exec(db).await?;
    project::Entity::delete_many().exec(db).await?;
    client_logo::Entity::delete_many().exec(db).await?;
    contact_submission::Entity::delete_many().exec(db).await?;
    service::Entity::delete_many().exec(db).await?;
    category::Entity::delete_many().exec(db).await?;
    user::Entity::delete_many().exec(db).await?;

    let now = Utc::now();

    // Users
    let admin = user::ActiveModel {
        username: Set(ADMIN_USERNAME.to_string()),
        email: Set("admin@greenfieldenv.co.id".to_string()),
        password: Set(hash::hash_password(ADMIN_PASSWORD).context("hash admin password")?),
        first_name: Set(Some("Admin".to_string())),
        last_name: Set(Some("User".to_string())),
        role: Set(user::ROLE_ADMIN.to_string()),
        is_active: Set(true),
        invited_by: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let editor_hash = hash::hash_password(EDITOR_PASSWORD).context("hash editor password")?;

    let sarah = user::ActiveModel {
        username: Set("sarah.putri".to_string()),
        email: Set("sarah.putri@greenfieldenv.co.id".to_string()),
        password: Set(editor_hash.clone()),
        first_name: Set(Some("Sarah".to_string())),
        last_name: Set(Some("Putri".to_string())),
        role: Set(user::ROLE_EDITOR.to_string()),
        is_active: Set(true),
        invited_by: Set(Some(admin.id)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let bambang = user::ActiveModel {
        username: Set("bambang.sutrisno".to_string()),
        email: Set("bambang.sutrisno@greenfieldenv.co.id".to_string()),
        password: Set(editor_hash),
        first_name: Set(Some("Bambang".to_string())),
        last_name: Set(Some("Sutrisno".to_string())),
        role: Set(user::ROLE_EDITOR.to_string()),
        is_active: Set(true),
        invited_by: Set(Some(admin.id)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!("Seeded 3 users");

    // Categories
    let new_category = |name: &str, description: &str, slug: &str| category::ActiveModel {
        name: Set(name.to_string()),
        description: Set(Some(description.to_string())),
        slug: Set(slug.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let green_building = new_category(
        "Green Building",
        "Sustainable building practices and green architecture",
        "green-building",
    )
    .insert(db)
    .await?;

    let waste_management = new_category(
        "Waste Management",
        "Waste reduction, recycling, and disposal solutions",
        "waste-management",
    )
    .insert(db)
    .await?;

    let monitoring = new_category(
        "Environmental Monitoring",
        "Environmental monitoring and assessment",
        "environmental-monitoring",
    )
    .insert(db)
    .await?;

    new_category(
        "Sustainability",
        "Sustainable business practices and ESG",
        "sustainability",
    )
    .insert(db)
    .await?;

    info!("Seeded 4 categories");

    // Services
    let new_service = |name: &str,
                       description: &str,
                       short_description: &str,
                       slug: &str,
                       icon: &str,
                       features: &[&str],
                       image_url: &str| service::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        short_description: Set(short_description.to_string()),
        slug: Set(slug.to_string()),
        icon: Set(icon.to_string()),
        features: Set(serde_json::json!(features)),
        image_url: Set(Some(image_url.to_string())),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let eia = new_service(
        "Environmental Impact Assessment",
        "Comprehensive environmental impact assessment services for development projects, \
         including AMDAL studies, feasibility analysis, and environmental monitoring programs.",
        "Evaluasi menyeluruh dampak lingkungan untuk proyek pembangunan dan industri",
        "environmental-impact-assessment",
        "Leaf",
        &["Analisis AMDAL", "Studi Kelayakan", "Monitoring & Evaluasi"],
        "https://images.unsplash.com/photo-1497486751825-1233686d5d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    )
    .insert(db)
    .await?;

    let water = new_service(
        "Water & Waste Management",
        "Advanced water treatment and waste management solutions, including wastewater \
         treatment systems, solid waste management, and recycling programs.",
        "Solusi pengelolaan air dan limbah yang efisien dan ramah lingkungan",
        "water-waste-management",
        "Droplets",
        &["Sistem Pengolahan Air", "Manajemen Limbah", "Daur Ulang"],
        "https://images.unsplash.com/photo-1581090700227-1e37b190418e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    )
    .insert(db)
    .await?;

    let air = new_service(
        "Air Quality Management",
        "Air quality monitoring and management services, including emission control systems, \
         air pollution assessment, and indoor air quality solutions.",
        "Pemantauan dan pengendalian kualitas udara untuk lingkungan yang sehat",
        "air-quality-management",
        "Wind",
        &["Monitoring Emisi", "Sistem Kontrol", "Audit Kualitas Udara"],
        "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    )
    .insert(db)
    .await?;

    new_service(
        "Sustainability Consulting",
        "Strategic sustainability consulting services, including ESG strategy development, \
         carbon footprint assessment, and sustainable business transformation.",
        "Konsultasi strategis untuk implementasi praktik bisnis berkelanjutan",
        "sustainability-consulting",
        "Recycle",
        &["Green Building", "Carbon Footprint", "ESG Strategy"],
        "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    )
    .insert(db)
    .await?;

    info!("Seeded 4 services");

    // Client logos
    let logos: [(&str, &str, i32); 6] = [
        ("PT Pertamina", "https://pertamina.com", 1),
        ("PT Unilever Indonesia", "https://unilever.co.id", 2),
        ("PT Semen Indonesia", "https://semenindonesia.com", 3),
        ("PT Astra International", "https://astra.co.id", 4),
        ("PT Bank Mandiri", "https://bankmandiri.co.id", 5),
        ("PT Telkom Indonesia", "https://telkom.co.id", 6),
    ];
    for (name, website_url, sort_order) in logos {
        client_logo::ActiveModel {
            name: Set(name.to_string()),
            logo_url: Set("https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=100".to_string()),
            website_url: Set(Some(website_url.to_string())),
            is_active: Set(true),
            sort_order: Set(sort_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!("Seeded 6 client logos");

    // Projects
    project::ActiveModel {
        title: Set("Green Building Certification for Jakarta Office Tower".to_string()),
        description: Set("Comprehensive green building assessment and certification project for a \
             40-story office building in Jakarta Central Business District."
            .to_string()),
        short_description: Set(
            "Green building certification project for modern office tower".to_string()
        ),
        client: Set("PT Ciputra Development".to_string()),
        service_id: Set(eia.id),
        image_url: Set(Some("https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string())),
        completed_at: Set(Some(date(2023, 10, 15))),
        duration: Set(Some("8 months".to_string())),
        team_size: Set(Some(12)),
        technologies: Set(serde_json::json!([
            "LEED Certification",
            "Energy Modeling",
            "Indoor Air Quality Assessment"
        ])),
        challenges: Set(Some(
            "Adapting international green building standards to Indonesian climate and regulations"
                .to_string(),
        )),
        results: Set(Some(
            "Achieved LEED Gold certification, 30% reduction in energy consumption".to_string(),
        )),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    project::ActiveModel {
        title: Set("Wastewater Treatment Plant for Manufacturing Facility".to_string()),
        description: Set("Design and implementation of advanced wastewater treatment system for \
             automotive manufacturing plant in Bekasi."
            .to_string()),
        short_description: Set("Advanced wastewater treatment system implementation".to_string()),
        client: Set("PT Astra Honda Motor".to_string()),
        service_id: Set(water.id),
        image_url: Set(Some("https://images.unsplash.com/photo-1581090700227-1e37b190418e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string())),
        completed_at: Set(Some(date(2023, 9, 20))),
        duration: Set(Some("6 months".to_string())),
        team_size: Set(Some(8)),
        technologies: Set(serde_json::json!([
            "Membrane Bioreactor",
            "Advanced Oxidation",
            "Sludge Treatment"
        ])),
        challenges: Set(Some(
            "Meeting strict discharge standards while maintaining production efficiency"
                .to_string(),
        )),
        results: Set(Some(
            "99.5% pollution reduction, full compliance with environmental regulations".to_string(),
        )),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    project::ActiveModel {
        title: Set("Air Quality Monitoring System for Industrial Complex".to_string()),
        description: Set("Installation and management of comprehensive air quality monitoring \
             network for Cikarang Industrial Estate."
            .to_string()),
        short_description: Set("Real-time air quality monitoring system".to_string()),
        client: Set("Cikarang Industrial Estate".to_string()),
        service_id: Set(air.id),
        image_url: Set(Some("https://images.unsplash.com/photo-1472214103451-9374bd1c798e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string())),
        completed_at: Set(Some(date(2023, 11, 30))),
        duration: Set(Some("4 months".to_string())),
        team_size: Set(Some(6)),
        technologies: Set(serde_json::json!([
            "IoT Sensors",
            "Real-time Monitoring",
            "Data Analytics"
        ])),
        challenges: Set(Some(
            "Integrating diverse monitoring equipment into unified system".to_string(),
        )),
        results: Set(Some(
            "24/7 monitoring capability, early warning system for air quality incidents"
                .to_string(),
        )),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!("Seeded 3 projects");

    // Blog posts
    blog_post::ActiveModel {
        title: Set("Implementasi Green Building di Indonesia: Peluang dan Tantangan".to_string()),
        content: Set("<p>Green building atau bangunan hijau merupakan konsep pembangunan \
             berkelanjutan yang semakin penting di Indonesia. Dengan iklim tropis dan kepadatan \
             penduduk yang tinggi, implementasi green building menjadi solusi untuk mengurangi \
             dampak lingkungan dari sektor konstruksi.</p>\n\
             <h2>Peluang Green Building di Indonesia</h2>\n\
             <ul>\n\
             <li><strong>Regulasi yang mendukung:</strong> Pemerintah telah mengeluarkan berbagai \
             regulasi yang mendorong pembangunan berkelanjutan</li>\n\
             <li><strong>Ketersediaan material lokal:</strong> Bahan bangunan ramah lingkungan \
             tersedia secara lokal</li>\n\
             <li><strong>Kesadaran lingkungan:</strong> Meningkatnya kesadaran masyarakat akan \
             pentingnya lingkungan</li>\n\
             </ul>\n\
             <h2>Tantangan yang Dihadapi</h2>\n\
             <ol>\n\
             <li><strong>Biaya awal yang tinggi:</strong> Investasi awal untuk green building \
             masih dianggap mahal</li>\n\
             <li><strong>Keterbatasan SDM:</strong> Kurangnya tenaga ahli yang memahami konsep \
             green building</li>\n\
             <li><strong>Sertifikasi:</strong> Proses sertifikasi yang kompleks dan memakan \
             waktu</li>\n\
             </ol>\n\
             <p>PT Greenfield Environment Solution telah membantu lebih dari 100 proyek green \
             building di Indonesia, dengan tingkat kepuasan klien mencapai 98%.</p>"
            .to_string()),
        excerpt: Set("Explore bagaimana konsep green building dapat diterapkan di Indonesia \
             dengan mempertimbangkan iklim tropis dan regulasi lokal"
            .to_string()),
        author_id: Set(sarah.id),
        category_id: Set(green_building.id),
        image_url: Set(Some("https://images.unsplash.com/photo-1509391366360-2e959784a276?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string())),
        published: Set(true),
        created_at: Set(date(2023, 12, 15)),
        updated_at: Set(date(2023, 12, 15)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    blog_post::ActiveModel {
        title: Set("Strategi Pengelolaan Limbah B3 untuk Industri Manufaktur".to_string()),
        content: Set("<p>Limbah Bahan Berbahaya dan Beracun (B3) memerlukan penanganan khusus \
             dalam industri manufaktur. Artikel ini membahas strategi komprehensif untuk \
             mengelola limbah B3 sesuai dengan regulasi yang berlaku di Indonesia.</p>\n\
             <h2>Regulasi Terkait</h2>\n\
             <ul>\n\
             <li>PP No. 22 Tahun 2021 tentang Penyelenggaraan Perlindungan dan Pengelolaan \
             Lingkungan Hidup</li>\n\
             <li>Permen LHK No. 6 Tahun 2021 tentang Tata Cara dan Persyaratan Pengelolaan \
             Limbah B3</li>\n\
             </ul>\n\
             <h2>Strategi Pengelolaan</h2>\n\
             <p>Strategi yang efektif meliputi minimisasi limbah melalui substitusi bahan baku, \
             penyimpanan yang aman dengan memperhatikan kompatibilitas kimia, serta pengolahan \
             dan pemanfaatan melalui recovery, treatment fisik-kimia, dan solidifikasi.</p>\n\
             <p>Implementasi yang tepat tidak hanya memastikan kepatuhan regulasi, tetapi juga \
             memberikan manfaat ekonomi melalui recovery material dan efisiensi proses.</p>"
            .to_string()),
        excerpt: Set("Panduan komprehensif untuk mengelola limbah berbahaya dan beracun (B3) \
             sesuai dengan regulasi yang berlaku di Indonesia"
            .to_string()),
        author_id: Set(bambang.id),
        category_id: Set(waste_management.id),
        image_url: Set(Some("https://images.unsplash.com/photo-1532996122724-e3c354a0b15b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string())),
        published: Set(true),
        created_at: Set(date(2023, 12, 12)),
        updated_at: Set(date(2023, 12, 12)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    blog_post::ActiveModel {
        title: Set("Teknologi IoT untuk Monitoring Lingkungan Real-time".to_string()),
        content: Set("<p>Internet of Things (IoT) membuka peluang baru dalam monitoring \
             lingkungan secara real-time. Teknologi ini memungkinkan pengumpulan data lingkungan \
             yang akurat dan kontinyu untuk berbagai parameter.</p>\n\
             <h2>Komponen Sistem</h2>\n\
             <ul>\n\
             <li><strong>Sensor kualitas udara:</strong> PM2.5, PM10, CO, NO2, SO2, O3</li>\n\
             <li><strong>Sensor kualitas air:</strong> pH, DO, COD, BOD, TSS, logam berat</li>\n\
             <li><strong>Sistem komunikasi:</strong> WiFi, LoRaWAN, 4G/5G, satelit</li>\n\
             <li><strong>Platform analytics:</strong> cloud computing, machine learning, \
             dashboard interaktif</li>\n\
             </ul>\n\
             <h2>Studi Kasus</h2>\n\
             <p>PT Greenfield Environment Solution telah mengimplementasikan sistem IoT \
             monitoring di Kawasan Industri Cikarang: 50 sensor terpasang, waktu respon insiden \
             turun dari 4 jam menjadi 15 menit, compliance rate naik dari 85% menjadi 99%, dan \
             biaya operasional monitoring berkurang 40%.</p>"
            .to_string()),
        excerpt: Set("Bagaimana teknologi Internet of Things (IoT) dapat meningkatkan \
             efektivitas monitoring lingkungan dalam berbagai industri"
            .to_string()),
        author_id: Set(sarah.id),
        category_id: Set(monitoring.id),
        image_url: Set(Some("https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string())),
        published: Set(true),
        created_at: Set(date(2023, 12, 10)),
        updated_at: Set(date(2023, 12, 10)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!("Seeded 3 blog posts");

    Ok(())
}
