use rand::Rng;

// Placeholder messages shown next to the status ("where is the stream?").
// Entries are rendered as raw HTML.
pub const PLACES: &[&str] = &[
    "a live tá debaixo da sua cama",
    "a live tá no bolso de trás da sua calça",
    "a live tá dentro da gaveta de meias da sua mãe",
    "a live está no outro castelo",
    "a live tá dentro do seu diário",
    "dá fila no omega, quem sabe a live aparece",
    "a live na verdade nunca existiu",
    "a live virou CLT e nunca mais foi vista",
    "a live tá atrás do ímã de geladeira de lembrança de Ilha Bela",
    "a live não tá aqui não",
    "se você fechar os olhos e imaginar, você pode ver a live",
    "a live tá embaixo da almofada do sofá",
    "a live tá na gaveta de bagunça que tem mais bagunça do que gaveta",
    "venho por meio desta informar que a live faleceu",
    "a live tá dormindo, shhh 🤫",
    "a live tá na garrafa de água na geladeira do seu vizinho",
    "pergunta pro omegamain, ele deve saber",
    "tallvez a live esteja mais perto do que você imagina",
    "a live tá presa na coleira do seu cachorro",
    "a live tá numa lata de leite ninho",
    "a live tá perdida num tempo passado",
    "você chega no hospital, pergunta na recepção, fala com o médico, mas infelizmente a live foi perdida",
    "a live é apenas um conceito",
    "a live é um conjunto de feiches de luz passeando por cabos de fibra ótica. Algum dia ela chega até você",
    "kasama não pode agora, ele tá sentado na beira do universo, esperando um ônibus",
    "a live tá atrás da moldura daquela foto de família",
    r#"<a href="https://www.youtube.com/watch?v=--9kqhzQ-8Q">H.Y.C.Y.BH?</a>"#,
];

pub fn pick_place<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PLACES[rng.random_range(0..PLACES.len())]
}
