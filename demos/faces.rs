use sequences::{enumerate_simplexes, simplex::decode_vertices, FaceLattice};

fn main() {
  tracing_subscriber::fmt::init();

  for n in 0..=3 {
    println!("n = {n}: {}", enumerate_simplexes(n));
  }

  let n = 4;
  let lattice = FaceLattice::new(n);
  let mut len = 0;
  for (rank, face) in lattice.iter().enumerate() {
    if face.size() != len {
      len = face.size();
      println!("length {len}: {} faces", lattice.faces_of_len(len).len());
    }
    println!("  #{rank:>3} {face} -> {}", decode_vertices(n, face));
  }
}
