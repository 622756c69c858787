use super::vector_loader::{Vector, VectorFailure, load_vectors};
// Runs the JSON codec vectors against the encoder and decoder
use urlquote::{DecoderOptions, EncoderOptions};

fn run(vector: &Vector) -> (String, &str) {
    match vector {
        Vector::Encode {
            input,
            safe,
            protected,
            qs,
            requote,
            expected,
        } => {
            let encoder = EncoderOptions::new()
                .safe(safe)
                .protected(protected)
                .qs(*qs)
                .requote(*requote)
                .build();
            (encoder.encode(input).into_owned(), expected.as_str())
        }
        Vector::Decode {
            input,
            ignore,
            unsafe_chars,
            qs,
            expected,
        } => {
            let decoder = DecoderOptions::new()
                .ignore(ignore)
                .unsafe_chars(unsafe_chars)
                .qs(*qs)
                .build();
            (decoder.decode(input).into_owned(), expected.as_str())
        }
    }
}

#[test]
fn test_codec_vectors() {
    let vectors = load_vectors();
    assert!(vectors.len() > 30);

    let failures: Vec<VectorFailure> = vectors
        .iter()
        .enumerate()
        .filter_map(|(case_num, vector)| {
            let (actual, expected) = run(vector);
            (actual != expected).then(|| VectorFailure {
                case_num,
                vector: vector.clone(),
                actual,
            })
        })
        .collect();

    assert!(failures.is_empty(), "{} failing vectors: {failures:#?}", failures.len());
}
