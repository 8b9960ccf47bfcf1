use criterion::{black_box, criterion_group, criterion_main, Criterion};

use troopdb::specs::troop_page;

/// A troop page shaped like the wiki's, padded with filler sections.
fn sample_page() -> String {
    let filler = "<p>Lorem ipsum <a href=\"/wiki/X\">dolor</a> sit amet.</p>\n".repeat(400);
    format!(
        r#"<div class="mw-parser-output">
             <table class="infobox"><tr><td><img class="tier-five"></td></tr>
             <tr><th>Wage</th><td>18 denars/day</td></tr></table>
             {filler}
             <h2><span class="mw-headline" id="Equipment">Equipment</span></h2>
             <table class="wikitable"><tbody>
               <tr><th>Weapons</th><td><a href="/wiki/Falchion">Falchion</a><br/>Javelin (Throwing)<br>Spear (Possible)</td></tr>
               <tr><th>Head Armor</th><td>Nasal Helmet</td></tr>
               <tr><th>Body Armor</th><td>Padded Coat<br />Mail Hauberk</td></tr>
               <tr><th>Mount</th><td>Sumpter Horse</td></tr>
               <tr><th>Mount Harness</th><td>?</td></tr>
             </tbody></table>
             {filler}
           </div>"#
    )
}

fn bench_troop_page(c: &mut Criterion) {
    let doc = sample_page();

    c.bench_function("troop_page_parse", |b| {
        b.iter(|| {
            let page = troop_page::parse(black_box(&doc), "Vlandian Veteran Crossbowman");
            black_box(page.equipment.len())
        })
    });

    c.bench_function("troop_page_equipment_rows", |b| {
        b.iter(|| black_box(troop_page::equipment_rows(black_box(&doc)).len()))
    });
}

criterion_group!(benches, bench_troop_page);
criterion_main!(benches);
