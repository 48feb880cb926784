use doc_similarity::{CountVectorizer, EmptyTokenPolicy, RankingReport};

fn main() {
    // add documents
    let mut vectorizer = CountVectorizer::with_policy(EmptyTokenPolicy::Index);
    vectorizer.insert_text("rust.txt", "Rust is fast. Rust is safe!");
    vectorizer.insert_text("rust2.txt", "(Rust) is safe, and Rust is fast.");
    vectorizer.insert_text("go.txt", "Go is simple and fast.");
    vectorizer.insert_text("empty.txt", "");

    // top 3 of 6 pairs
    let ranking = match vectorizer.rank(3) {
        Ok(ranking) => ranking,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    // print result
    println!("Ranking: \n{}", ranking);
    println!("{:#?}", ranking);
    println!("header: {:?}", vectorizer.table().header(vectorizer.vocabulary()));

    let report = RankingReport::new(&vectorizer, &ranking);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{err}"),
    }
}
